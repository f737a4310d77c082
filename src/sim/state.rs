//! Match state and core simulation types
//!
//! Everything mutable during a match lives on `MatchState`; a finished match
//! is frozen and a new match is a fresh instance. The roster is kept in
//! ascending-id order and every pass iterates it that way.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::config::{ConfigError, MatchConfig};

/// Who directs an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Steered by external pointer input
    Controlled,
    /// Steered by the chase/wander policy
    Autonomous,
}

/// A simulated combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub pos: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Displacement per tick, fixed for the agent's lifetime
    pub speed: f32,
    /// Combat weight for the win draw, fixed at creation
    pub power: f32,
    pub alive: bool,
    /// Combat eliminations scored; never decremented
    pub kills: u32,
    pub role: Role,
}

impl Agent {
    pub fn new(id: u32, pos: Vec2, radius: f32, speed: f32, power: f32, role: Role) -> Self {
        Self {
            id,
            pos,
            radius,
            speed,
            power,
            alive: true,
            kills: 0,
            role,
        }
    }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.role == Role::Controlled
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Roster spawned, nothing moves yet
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Terminal; state is frozen
    Finished,
}

/// Outcome snapshot emitted exactly once when a match finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Sole survivor, or `None` when the match ended without one
    pub winner: Option<u32>,
    /// Combat kills per agent id at termination
    pub kills: BTreeMap<u32, u32>,
    /// Tick count at termination
    pub ticks: u64,
}

/// Read-only per-agent projection for the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AgentView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub role: Role,
    pub alive: bool,
    pub is_controlled: bool,
}

/// Read-only per-tick projection of the whole match.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub agents: Vec<AgentView>,
    pub zone_center: Vec2,
    pub zone_radius: f32,
    pub alive_count: usize,
}

/// All mutable state for one match instance.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: MatchConfig,
    pub seed: u64,
    pub phase: MatchPhase,
    /// Zone clock, seconds since start
    pub elapsed_secs: f32,
    pub tick_count: u64,
    /// Roster in ascending-id order; the controlled agent is id 0
    pub agents: Vec<Agent>,
    pub zone: Zone,
    /// Last-written pointer target for the controlled agent
    pub pointer: Vec2,
    /// Agents eliminated by combat since start (kill-conservation count)
    pub combat_eliminations: u32,
    pub result: Option<MatchResult>,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    /// Validate `config` and spawn a fresh roster: one controlled agent
    /// (id 0) plus the configured number of autonomous agents, all placed
    /// uniformly inside the clamped arena rectangle.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let zone = Zone::new(&config);
        let radius = config.agent_radius;

        let spawn = |rng: &mut Pcg32| {
            Vec2::new(
                rng.random_range(radius..config.arena_width - radius),
                rng.random_range(radius..config.arena_height - radius),
            )
        };

        let mut agents = Vec::with_capacity(config.autonomous_count as usize + 1);
        agents.push(Agent::new(
            0,
            spawn(&mut rng),
            radius,
            config.controlled_speed,
            config.controlled_power,
            Role::Controlled,
        ));
        for id in 1..=config.autonomous_count {
            let speed = if config.autonomous_speed_max > config.autonomous_speed_min {
                rng.random_range(config.autonomous_speed_min..config.autonomous_speed_max)
            } else {
                config.autonomous_speed_min
            };
            agents.push(Agent::new(
                id,
                spawn(&mut rng),
                radius,
                speed,
                config.autonomous_power,
                Role::Autonomous,
            ));
        }

        log::info!(
            "match ready: {} agents in {}x{} arena (seed {seed})",
            agents.len(),
            config.arena_width,
            config.arena_height,
        );

        Ok(Self {
            pointer: zone.center,
            zone,
            config,
            seed,
            phase: MatchPhase::Idle,
            elapsed_secs: 0.0,
            tick_count: 0,
            agents,
            combat_eliminations: 0,
            result: None,
            rng,
        })
    }

    /// Enter `Running`. No-op unless the match is still `Idle`.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Idle {
            self.phase = MatchPhase::Running;
            log::info!("match started");
        }
    }

    /// The single controlled agent (id 0 by construction).
    #[inline]
    pub fn controlled(&self) -> &Agent {
        &self.agents[0]
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Read-only projection for the rendering collaborator.
    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            agents: self
                .agents
                .iter()
                .map(|a| AgentView {
                    id: a.id,
                    pos: a.pos,
                    radius: a.radius,
                    role: a.role,
                    alive: a.alive,
                    is_controlled: a.is_controlled(),
                })
                .collect(),
            zone_center: self.zone.center,
            zone_radius: self.zone.current_radius,
            alive_count: self.alive_count(),
        }
    }
}
