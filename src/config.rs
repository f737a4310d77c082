//! Match configuration and validation
//!
//! Invalid setups are rejected before a match starts; nothing in the
//! simulation clamps bad configuration silently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised when validating a match configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive and finite, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("arena {width}x{height} cannot fit an agent of radius {radius}")]
    ArenaTooSmall {
        width: f32,
        height: f32,
        radius: f32,
    },
    #[error("agent radius must be positive, got {0}")]
    InvalidAgentRadius(f32),
    #[error("controlled speed must be positive, got {0}")]
    InvalidControlledSpeed(f32),
    #[error("autonomous speed range must be positive with min <= max, got {min}..{max}")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("power weights must be positive, got {controlled} vs {autonomous}")]
    InvalidPowerWeights { controlled: f32, autonomous: f32 },
    #[error("aggression radius and chase jitter must be non-negative, got {radius} / {jitter}")]
    InvalidAggression { radius: f32, jitter: f32 },
    #[error("shrink cap must lie in [0, 1), got {0}")]
    InvalidShrinkCap(f32),
    #[error("shrink duration must be positive, got {0}")]
    InvalidShrinkDuration(f32),
    #[error("zone minimum radius must be positive, got {0}")]
    InvalidZoneMinRadius(f32),
}

/// Complete configuration for one match instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Autonomous agents spawned alongside the single controlled one
    pub autonomous_count: u32,
    /// Controlled agent displacement per tick
    pub controlled_speed: f32,
    /// Autonomous speeds are drawn uniformly from [min, max) at spawn
    pub autonomous_speed_min: f32,
    pub autonomous_speed_max: f32,
    /// Collision radius shared by every agent
    pub agent_radius: f32,
    /// Distance at which an autonomous agent switches from wander to chase
    pub aggression_radius: f32,
    /// Per-axis jitter applied to the chase target each tick
    pub chase_jitter: f32,
    pub controlled_power: f32,
    pub autonomous_power: f32,
    /// Shrink fraction clamp, must stay below 1
    pub shrink_cap: f32,
    pub shrink_duration_secs: f32,
    pub zone_min_radius: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            autonomous_count: DEFAULT_AUTONOMOUS_COUNT,
            controlled_speed: CONTROLLED_SPEED,
            autonomous_speed_min: AUTONOMOUS_SPEED_MIN,
            autonomous_speed_max: AUTONOMOUS_SPEED_MAX,
            agent_radius: AGENT_RADIUS,
            aggression_radius: AGGRESSION_RADIUS,
            chase_jitter: CHASE_JITTER,
            controlled_power: CONTROLLED_POWER,
            autonomous_power: AUTONOMOUS_POWER,
            shrink_cap: SHRINK_CAP,
            shrink_duration_secs: SHRINK_DURATION_SECS,
            zone_min_radius: ZONE_MIN_RADIUS,
        }
    }
}

impl MatchConfig {
    /// Reject out-of-range parameters before a match is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.arena_width, self.arena_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidArena {
                width: w,
                height: h,
            });
        }
        if !(self.agent_radius.is_finite() && self.agent_radius > 0.0) {
            return Err(ConfigError::InvalidAgentRadius(self.agent_radius));
        }
        if w <= 2.0 * self.agent_radius || h <= 2.0 * self.agent_radius {
            return Err(ConfigError::ArenaTooSmall {
                width: w,
                height: h,
                radius: self.agent_radius,
            });
        }
        if !(self.controlled_speed.is_finite() && self.controlled_speed > 0.0) {
            return Err(ConfigError::InvalidControlledSpeed(self.controlled_speed));
        }
        let (min, max) = (self.autonomous_speed_min, self.autonomous_speed_max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidSpeedRange { min, max });
        }
        if !(self.controlled_power > 0.0 && self.autonomous_power > 0.0) {
            return Err(ConfigError::InvalidPowerWeights {
                controlled: self.controlled_power,
                autonomous: self.autonomous_power,
            });
        }
        if self.aggression_radius < 0.0 || self.chase_jitter < 0.0 {
            return Err(ConfigError::InvalidAggression {
                radius: self.aggression_radius,
                jitter: self.chase_jitter,
            });
        }
        if !(0.0..1.0).contains(&self.shrink_cap) {
            return Err(ConfigError::InvalidShrinkCap(self.shrink_cap));
        }
        if !(self.shrink_duration_secs.is_finite() && self.shrink_duration_secs > 0.0) {
            return Err(ConfigError::InvalidShrinkDuration(self.shrink_duration_secs));
        }
        if !(self.zone_min_radius.is_finite() && self.zone_min_radius > 0.0) {
            return Err(ConfigError::InvalidZoneMinRadius(self.zone_min_radius));
        }
        Ok(())
    }
}
