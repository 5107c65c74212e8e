//! Game session state and core types
//!
//! Everything a host needs to display or persist a run lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// One of the K distinct game tokens (shape/color), in `[0, alphabet_size)`
pub type Symbol = u8;

/// Current phase of a session's turn-taking protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// No active round; player input locked
    #[default]
    Idle,
    /// The sequence is being played back; player input locked
    Presenting,
    /// Playback finished; accepting player input one symbol at a time
    AwaitingInput,
    /// Player matched the full sequence; waiting for `advance_level`
    RoundComplete,
    /// Player missed; terminal until `reset`
    Failed,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (serializable; the secret sequence included)
///
/// Owned and mutated exclusively through [`SequenceGame`](super::SequenceGame);
/// hosts get read access for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Accumulated score
    pub score: u64,
    /// Difficulty tier, starts at 1
    pub level: u32,
    /// The secret sequence, append-only within a run
    pub sequence: Vec<Symbol>,
    /// Player input for the current round, cleared at round start
    pub player_input: Vec<Symbol>,
    /// Current phase
    pub phase: GamePhase,
}

impl GameSession {
    /// Fresh session: no sequence, score 0, level 1, idle
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            sequence: Vec::new(),
            player_input: Vec::new(),
            phase: GamePhase::Idle,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = GameSession::new();
        assert_eq!(session.score, 0);
        assert_eq!(session.level, 1);
        assert!(session.sequence.is_empty());
        assert!(session.player_input.is_empty());
        assert_eq!(session.phase, GamePhase::Idle);
    }

    #[test]
    fn test_rng_state_reproducible() {
        use rand::Rng;

        let state = RngState::new(42);
        let a: u32 = state.to_rng().random();
        let b: u32 = state.to_rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_session_json_round_trip() {
        let session = GameSession {
            score: 30,
            level: 3,
            sequence: vec![1, 3, 0, 2],
            player_input: vec![1, 3],
            phase: GamePhase::AwaitingInput,
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
