//! Arena Royale entry point
//!
//! Headless demo: runs seeded matches to completion with a zone-center
//! pointer policy and prints each result as JSON, standing in for the
//! rendering/leaderboard collaborator.

use arena_royale::sim::{MatchState, run_to_completion};
use arena_royale::{Leaderboard, MatchConfig};

/// Generous bound; the shrinking zone ends matches in a few thousand ticks
const MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA4E7A_0001);
    let rounds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    log::info!("arena-royale: seed {seed}, {rounds} round(s)");

    let config = MatchConfig::default();
    let mut leaderboard = Leaderboard::new();

    for round in 0..rounds {
        let mut state = match MatchState::new(config.clone(), seed.wrapping_add(round)) {
            Ok(state) => state,
            Err(err) => {
                log::error!("match rejected: {err}");
                std::process::exit(1);
            }
        };

        // Hug the zone center; the simplest strategy that survives the shrink
        let pointer = |s: &MatchState| {
            if s.tick_count % 600 == 0 {
                let frame = s.frame();
                log::debug!(
                    "tick {}: {} alive, zone radius {:.1}",
                    s.tick_count,
                    frame.alive_count,
                    frame.zone_radius
                );
            }
            Some(s.zone.center)
        };
        match run_to_completion(&mut state, pointer, MAX_TICKS) {
            Some(result) => {
                leaderboard.record(&result);
                match serde_json::to_string(&result) {
                    Ok(json) => println!("{json}"),
                    Err(err) => log::error!("result serialization failed: {err}"),
                }
            }
            None => log::warn!("round {round} hit the tick bound before finishing"),
        }
    }

    if let Some(top) = leaderboard.top_kills() {
        log::info!(
            "session over: {} match(es) recorded, top kill count {top}",
            leaderboard.entries.len()
        );
    }
}
