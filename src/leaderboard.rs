//! Session leaderboard
//!
//! Rolling record of finished matches for the current session, newest first.
//! Nothing here touches disk or network; match history does not outlive the
//! process.

use serde::Serialize;

use crate::sim::MatchResult;

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// One finished match.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// Winning agent, if the match produced one
    pub winner: Option<u32>,
    /// Winner's combat kills (0 when there was no winner)
    pub kills: u32,
    /// Match length in ticks
    pub ticks: u64,
}

/// Session-local leaderboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished match, trimming to the newest [`MAX_ENTRIES`].
    pub fn record(&mut self, result: &MatchResult) {
        let kills = result
            .winner
            .and_then(|id| result.kills.get(&id).copied())
            .unwrap_or(0);
        self.entries.insert(
            0,
            LeaderboardEntry {
                winner: result.winner,
                kills,
                ticks: result.ticks,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best kill count recorded this session
    pub fn top_kills(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.kills).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result(winner: Option<u32>, winner_kills: u32, ticks: u64) -> MatchResult {
        let mut kills = BTreeMap::new();
        if let Some(id) = winner {
            kills.insert(id, winner_kills);
        }
        MatchResult {
            winner,
            kills,
            ticks,
        }
    }

    #[test]
    fn test_newest_first_and_trimmed() {
        let mut board = Leaderboard::new();
        for i in 0..15u64 {
            board.record(&result(Some(0), i as u32, i));
        }
        assert_eq!(board.entries.len(), MAX_ENTRIES);
        assert_eq!(board.entries[0].ticks, 14);
        assert_eq!(board.entries.last().unwrap().ticks, 5);
    }

    #[test]
    fn test_no_winner_records_zero_kills() {
        let mut board = Leaderboard::new();
        board.record(&result(None, 0, 100));
        assert_eq!(board.entries[0].winner, None);
        assert_eq!(board.entries[0].kills, 0);
    }

    #[test]
    fn test_top_kills() {
        let mut board = Leaderboard::new();
        assert_eq!(board.top_kills(), None);
        board.record(&result(Some(0), 2, 10));
        board.record(&result(Some(3), 5, 20));
        assert_eq!(board.top_kills(), Some(5));
    }
}
