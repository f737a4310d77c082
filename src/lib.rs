//! Arena Royale - a last-agent-standing match simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, combat, shrinking zone, match loop)
//! - `config`: Match configuration with fail-fast validation
//! - `leaderboard`: Session-local record of finished matches
//!
//! Rendering, wallet/chain integration and UI wiring are external
//! collaborators: they feed configuration and per-tick pointer input in, and
//! receive frame snapshots and the terminal `MatchResult` out.

pub mod config;
pub mod leaderboard;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use leaderboard::Leaderboard;
pub use sim::{FrameSnapshot, MatchPhase, MatchResult, MatchState, TickInput, tick};

/// Simulation defaults and tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Collision radius shared by every agent
    pub const AGENT_RADIUS: f32 = 10.0;
    /// Controlled agent displacement per tick
    pub const CONTROLLED_SPEED: f32 = 2.5;
    /// Autonomous displacement per tick, drawn from [min, max) at spawn
    pub const AUTONOMOUS_SPEED_MIN: f32 = 1.0;
    pub const AUTONOMOUS_SPEED_MAX: f32 = 2.4;
    /// Default number of autonomous agents per match
    pub const DEFAULT_AUTONOMOUS_COUNT: u32 = 7;

    /// Distance at which an autonomous agent stops wandering and chases
    pub const AGGRESSION_RADIUS: f32 = 120.0;
    /// Per-axis jitter applied to the chase target each tick
    pub const CHASE_JITTER: f32 = 20.0;

    /// Combat power weights for the win draw
    pub const CONTROLLED_POWER: f32 = 1.1;
    pub const AUTONOMOUS_POWER: f32 = 1.0;

    /// Shrink fraction is clamped here; the zone never fully collapses
    pub const SHRINK_CAP: f32 = 0.92;
    /// Seconds over which the zone shrinks toward the cap
    pub const SHRINK_DURATION_SECS: f32 = 60.0;
    /// Radius floor the zone never drops below
    pub const ZONE_MIN_RADIUS: f32 = 40.0;
    /// Shrinkable zone radius as a fraction of the smaller arena dimension
    pub const ZONE_RADIUS_FACTOR: f32 = 0.45;

    /// Default arena dimensions
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
}
