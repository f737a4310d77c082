//! One simulation tick
//!
//! Fixed order per tick: zone clock, motion, combat, zone elimination,
//! termination check. A tick is atomic; the external loop decides whether
//! another one runs.

use glam::Vec2;
use rand::Rng;

use super::combat::resolve_contacts;
use super::motion::{ArenaBounds, move_toward};
use super::state::{MatchPhase, MatchResult, MatchState, Role};
use crate::config::MatchConfig;

/// External input consumed by a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer target for the controlled agent. `None` keeps the last
    /// written target; rapid updates between ticks coalesce to the newest.
    pub pointer: Option<Vec2>,
}

/// Targeting policy for autonomous agents: chase a jittered point near the
/// controlled agent when inside the aggression radius, otherwise wander
/// toward a fresh random point. Re-drawn every tick.
fn autonomous_target<R: Rng>(
    pos: Vec2,
    controlled_pos: Vec2,
    config: &MatchConfig,
    rng: &mut R,
) -> Vec2 {
    if pos.distance(controlled_pos) < config.aggression_radius {
        let jitter = config.chase_jitter;
        let mut target = controlled_pos;
        if jitter > 0.0 {
            target += Vec2::new(
                rng.random_range(-jitter..jitter),
                rng.random_range(-jitter..jitter),
            );
        }
        target
    } else {
        Vec2::new(
            rng.random_range(0.0..config.arena_width),
            rng.random_range(0.0..config.arena_height),
        )
    }
}

/// Advance the match by one tick.
///
/// Returns the match result exactly once, at the tick where termination is
/// detected. Ticks in `Idle` or `Finished` are no-ops.
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) -> Option<MatchResult> {
    if state.phase != MatchPhase::Running {
        return None;
    }

    state.tick_count += 1;
    state.elapsed_secs += dt.max(0.0);

    // (1) zone clock
    state.zone.advance(state.elapsed_secs);

    // (2) motion; the pointer target is last-write-wins
    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }
    let bounds = ArenaBounds {
        width: state.config.arena_width,
        height: state.config.arena_height,
    };
    let pointer = state.pointer;
    let controlled_pos = state.agents[0].pos;
    for agent in state.agents.iter_mut().filter(|a| a.alive) {
        let target = match agent.role {
            Role::Controlled => pointer,
            Role::Autonomous => {
                autonomous_target(agent.pos, controlled_pos, &state.config, &mut state.rng)
            }
        };
        move_toward(agent, target, bounds);
    }

    // (3) combat
    state.combat_eliminations += resolve_contacts(&mut state.agents, &mut state.rng);

    // (4) zone elimination: instant for anyone caught outside
    for agent in state.agents.iter_mut().filter(|a| a.alive) {
        if !state.zone.contains(agent.pos) {
            agent.alive = false;
            log::debug!("agent {} eliminated by the zone", agent.id);
        }
    }

    // (5) termination
    let alive_count = state.agents.iter().filter(|a| a.alive).count();
    if alive_count <= 1 || !state.agents[0].alive {
        state.phase = MatchPhase::Finished;
        let winner = if alive_count == 1 {
            state.agents.iter().find(|a| a.alive).map(|a| a.id)
        } else {
            None
        };
        let result = MatchResult {
            winner,
            kills: state.agents.iter().map(|a| (a.id, a.kills)).collect(),
            ticks: state.tick_count,
        };
        log::info!(
            "match finished after {} ticks: winner {winner:?}, {} combat eliminations",
            state.tick_count,
            state.combat_eliminations,
        );
        state.result = Some(result.clone());
        return Some(result);
    }
    None
}
