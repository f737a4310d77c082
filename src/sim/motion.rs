//! Per-tick agent motion
//!
//! Motion is target seeking only: one unit-vector step per tick, clamped so
//! agents stay inside the arena no matter where the target lies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Agent;

/// Axis-aligned arena extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl ArenaBounds {
    /// Clamp a position so a circle of `radius` stays fully inside.
    pub fn clamp(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(radius, self.width - radius),
            pos.y.clamp(radius, self.height - radius),
        )
    }
}

/// Step `agent` one tick toward `target`.
///
/// A target at the agent's own position produces no movement. Dead agents
/// are never moved; callers exclude them, and the guard here keeps an
/// erroneous call from producing orphan motion.
pub fn move_toward(agent: &mut Agent, target: Vec2, bounds: ArenaBounds) {
    if !agent.alive {
        log::debug!("motion requested for dead agent {}", agent.id);
        return;
    }
    let delta = target - agent.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }
    let next = agent.pos + delta / dist * agent.speed;
    agent.pos = bounds.clamp(next, agent.radius);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Role;
    use proptest::prelude::*;

    const BOUNDS: ArenaBounds = ArenaBounds {
        width: 800.0,
        height: 600.0,
    };

    fn agent_at(pos: Vec2, speed: f32) -> Agent {
        Agent::new(1, pos, 10.0, speed, 1.0, Role::Autonomous)
    }

    #[test]
    fn test_step_has_speed_magnitude() {
        let mut agent = agent_at(Vec2::new(100.0, 100.0), 2.5);
        move_toward(&mut agent, Vec2::new(400.0, 300.0), BOUNDS);
        let moved = agent.pos.distance(Vec2::new(100.0, 100.0));
        assert!((moved - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_step_points_at_target() {
        let mut agent = agent_at(Vec2::new(100.0, 100.0), 2.0);
        move_toward(&mut agent, Vec2::new(200.0, 100.0), BOUNDS);
        assert_eq!(agent.pos, Vec2::new(102.0, 100.0));
    }

    #[test]
    fn test_target_at_position_is_no_op() {
        let pos = Vec2::new(150.0, 150.0);
        let mut agent = agent_at(pos, 2.0);
        move_toward(&mut agent, pos, BOUNDS);
        assert_eq!(agent.pos, pos);
    }

    #[test]
    fn test_clamped_to_arena() {
        // Hugging the left wall, target far outside
        let mut agent = agent_at(Vec2::new(10.0, 300.0), 5.0);
        move_toward(&mut agent, Vec2::new(-1000.0, 300.0), BOUNDS);
        assert_eq!(agent.pos.x, 10.0);
    }

    #[test]
    fn test_dead_agent_is_not_moved() {
        let pos = Vec2::new(100.0, 100.0);
        let mut agent = agent_at(pos, 3.0);
        agent.alive = false;
        move_toward(&mut agent, Vec2::new(500.0, 500.0), BOUNDS);
        assert_eq!(agent.pos, pos);
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            px in 10.0f32..790.0,
            py in 10.0f32..590.0,
            tx in -1.0e4f32..1.0e4,
            ty in -1.0e4f32..1.0e4,
            speed in 0.1f32..50.0,
        ) {
            let mut agent = agent_at(Vec2::new(px, py), speed);
            move_toward(&mut agent, Vec2::new(tx, ty), BOUNDS);
            prop_assert!(agent.pos.x >= agent.radius && agent.pos.x <= BOUNDS.width - agent.radius);
            prop_assert!(agent.pos.y >= agent.radius && agent.pos.y <= BOUNDS.height - agent.radius);
        }

        #[test]
        fn prop_step_never_exceeds_speed(
            px in 10.0f32..790.0,
            py in 10.0f32..590.0,
            tx in -1.0e4f32..1.0e4,
            ty in -1.0e4f32..1.0e4,
            speed in 0.1f32..50.0,
        ) {
            let start = Vec2::new(px, py);
            let mut agent = agent_at(start, speed);
            move_toward(&mut agent, Vec2::new(tx, ty), BOUNDS);
            prop_assert!(agent.pos.distance(start) <= speed + 1e-3);
        }
    }
}
