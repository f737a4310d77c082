//! Pairwise combat resolution
//!
//! One pass per tick: every unordered pair of alive agents whose collision
//! circles overlap resolves into exactly one elimination. Liveness is
//! re-read for both sides inside the nested loop, so an agent eliminated
//! earlier in the pass can neither fight again nor score a posthumous kill.

use rand::Rng;

use super::state::Agent;

/// Run one resolution pass over the roster.
///
/// Pairs are enumerated in ascending-id order (the roster's order), which
/// together with a seeded RNG makes the pass reproducible. Returns the
/// number of agents eliminated by combat.
pub fn resolve_contacts<R: Rng>(agents: &mut [Agent], rng: &mut R) -> u32 {
    debug_assert!(
        agents.windows(2).all(|w| w[0].id < w[1].id),
        "roster must stay in ascending-id order"
    );

    let mut eliminated = 0;
    for i in 0..agents.len() {
        for j in (i + 1)..agents.len() {
            if !agents[i].alive {
                break;
            }
            if !agents[j].alive {
                continue;
            }
            let dist = agents[i].pos.distance(agents[j].pos);
            if dist >= agents[i].radius + agents[j].radius {
                continue;
            }

            // Contact: a single weighted draw decides the pair
            let (pow_i, pow_j) = (agents[i].power, agents[j].power);
            let (winner, loser) = if rng.random::<f32>() * (pow_i + pow_j) < pow_i {
                (i, j)
            } else {
                (j, i)
            };
            agents[loser].alive = false;
            agents[winner].kills += 1;
            eliminated += 1;
            log::debug!(
                "agent {} eliminated agent {} in contact",
                agents[winner].id,
                agents[loser].id
            );
        }
    }
    eliminated
}
