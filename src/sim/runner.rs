//! Headless match loop
//!
//! Drives the simulator one tick per frame until the match finishes,
//! independent of any rendering. Pointer input is polled from the caller
//! once per tick; writes between ticks coalesce to the last one.

use glam::Vec2;

use super::state::{MatchResult, MatchState};
use super::tick::{TickInput, tick};
use crate::consts::SIM_DT;

/// Drive `state` to completion at the fixed timestep.
///
/// `pointer` supplies the controlled agent's target each tick. Returns
/// `None` only if `max_ticks` elapse first; the shrinking zone makes that a
/// safety bound rather than an expected outcome.
pub fn run_to_completion<F>(
    state: &mut MatchState,
    mut pointer: F,
    max_ticks: u64,
) -> Option<MatchResult>
where
    F: FnMut(&MatchState) -> Option<Vec2>,
{
    state.start();
    for _ in 0..max_ticks {
        let input = TickInput {
            pointer: pointer(state),
        };
        if let Some(result) = tick(state, &input, SIM_DT) {
            return Some(result);
        }
    }
    log::warn!("match still running after {max_ticks} ticks, giving up");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::sim::state::MatchPhase;

    #[test]
    fn test_match_runs_to_completion() {
        let mut state = MatchState::new(MatchConfig::default(), 1).unwrap();
        let result = run_to_completion(&mut state, |s| Some(s.zone.center), 100_000);

        let result = result.expect("zone pressure must finish the match");
        assert_eq!(state.phase, MatchPhase::Finished);
        assert_eq!(state.result.as_ref(), Some(&result));
        assert!(result.ticks <= 100_000);
    }

    #[test]
    fn test_tick_bound_respected() {
        let mut state = MatchState::new(MatchConfig::default(), 1).unwrap();
        assert!(run_to_completion(&mut state, |s| Some(s.zone.center), 0).is_none());
        assert_eq!(state.tick_count, 0);
    }
}
