//! High score leaderboard
//!
//! Top-10 descending by score. The crate keeps it memory-resident; hosts
//! persist the JSON wherever they like (LocalStorage, a file, nowhere).

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Caller-supplied unix timestamp (ms); the crate never reads a clock
    pub timestamp: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed), `None` if it doesn't qualify
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished run, returning the rank achieved (1-indexed) or
    /// `None` if it didn't qualify
    pub fn add_score(&mut self, score: u64, level: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };
        let rank = match self.entries.iter().position(|e| score > e.score) {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("new high score {score} (level {level}) at rank {rank}");
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Encode for host-side persistence
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a leaderboard a host persisted earlier
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_board() -> HighScores {
        let mut board = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            board.add_score(i * 100, i as u32, i * 1000);
        }
        board
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let board = HighScores::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn test_entries_stay_sorted_descending() {
        let mut board = HighScores::new();
        board.add_score(50, 2, 0);
        board.add_score(200, 5, 0);
        board.add_score(120, 4, 0);
        let scores: Vec<u64> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![200, 120, 50]);
        assert_eq!(board.top_score(), Some(200));
    }

    #[test]
    fn test_full_board_drops_lowest() {
        let mut board = filled_board();
        assert!(!board.qualifies(100)); // ties don't displace
        assert_eq!(board.potential_rank(550), Some(6));

        let rank = board.add_score(550, 6, 0);
        assert_eq!(rank, Some(6));
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert!(board.entries.iter().all(|e| e.score > 100));
    }

    #[test]
    fn test_json_round_trip() {
        let board = filled_board();
        let json = board.to_json().unwrap();
        let back = HighScores::from_json(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(HighScores::from_json("not json").is_err());
    }
}
