//! Turn-taking protocol and scoring
//!
//! [`SequenceGame`] enforces the rules of the memory game: sequence growth,
//! playback gating, per-symbol input validation, scoring. It never renders,
//! sounds, or schedules anything; collaborators call in and react to the
//! returned outcomes.
//!
//! Misuse policy: calling an operation from the wrong phase is a benign
//! no-op (`None` / [`SubmitOutcome::Ignored`]), matching the redundant
//! guard calls UI glue tends to make.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameSession, RngState, Symbol};
use crate::config::GameConfig;
use crate::sound::SoundMap;

/// Score and level pair returned by `reset` and `advance_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub score: u64,
    pub level: u32,
}

/// Everything a host needs to celebrate a completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u64,
    pub level: u32,
    /// Copy of the matched sequence, for replay/artwork collaborators
    pub sequence: Vec<Symbol>,
}

/// Result of a single `submit_symbol` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Input arrived outside `AwaitingInput` or was out of range; no state
    /// changed
    Ignored,
    /// Wrong symbol; the session is now `Failed` with this final standing
    Mismatch { score: u64, level: u32 },
    /// Correct symbol, more remain
    Partial { entered: usize, remaining: usize },
    /// Correct symbol completed the round; score already includes the award
    Complete(RoundSummary),
}

impl SubmitOutcome {
    /// Whether the submitted symbol matched the sequence
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Partial { .. } | Self::Complete(_))
    }

    /// Whether the submission completed the round
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// The sequence-memory rules engine
///
/// Owns the secret sequence, the player's in-progress input, and the
/// score/level progression. Deterministic for a given seed: sequences,
/// sound maps, and therefore whole runs replay identically.
#[derive(Debug, Clone)]
pub struct SequenceGame {
    config: GameConfig,
    rng_state: RngState,
    rng: Pcg32,
    session: GameSession,
    sound_map: SoundMap,
}

impl SequenceGame {
    /// Create an engine with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create an engine with explicit tuning
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let sound_map = SoundMap::generate(&mut rng, config.alphabet_size);
        Self {
            config,
            rng_state,
            rng,
            session: GameSession::new(),
            sound_map,
        }
    }

    /// Read access to the live session (score, level, phase, ...)
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn level(&self) -> u32 {
        self.session.level
    }

    /// Current per-symbol tones for the audio collaborator
    pub fn sound_map(&self) -> &SoundMap {
        &self.sound_map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Discard the session and return to a fresh start
    ///
    /// Safe from any phase; the only cancellation primitive. Re-seeds the
    /// RNG from the construction seed, so a reset run replays the original.
    pub fn reset(&mut self) -> Standing {
        self.rng = self.rng_state.to_rng();
        self.session = GameSession::new();
        self.sound_map = SoundMap::generate(&mut self.rng, self.config.alphabet_size);
        log::info!("session reset (seed {})", self.rng_state.seed);
        Standing { score: 0, level: 1 }
    }

    /// Begin a round: lock input and hand the presenter a sequence snapshot
    ///
    /// Only valid from `Idle`; any other phase is a no-op returning `None`.
    /// The first round after a reset draws the opening symbols here.
    pub fn start_round(&mut self) -> Option<Vec<Symbol>> {
        if self.session.phase != GamePhase::Idle {
            log::debug!("start_round ignored in {:?}", self.session.phase);
            return None;
        }
        if self.session.sequence.is_empty() {
            for _ in 0..self.config.opening_draw {
                self.append_symbol();
            }
        }
        self.session.player_input.clear();
        self.session.phase = GamePhase::Presenting;
        log::debug!(
            "round started at level {} ({} symbols)",
            self.session.level,
            self.session.sequence.len()
        );
        Some(self.session.sequence.clone())
    }

    /// Presenter signal: playback done, open the floor to the player
    ///
    /// Returns whether the transition happened. The engine trusts the
    /// presenter to have played every snapshot element; it cannot verify.
    pub fn finish_presentation(&mut self) -> bool {
        if self.session.phase != GamePhase::Presenting {
            return false;
        }
        self.session.phase = GamePhase::AwaitingInput;
        true
    }

    /// Judge one player symbol against the sequence
    ///
    /// Each symbol is checked immediately, not batched. A mismatch ends the
    /// game on the spot; there is no partial credit or retry within a round.
    pub fn submit_symbol(&mut self, symbol: Symbol) -> SubmitOutcome {
        if self.session.phase != GamePhase::AwaitingInput {
            log::debug!("input {symbol} ignored in {:?}", self.session.phase);
            return SubmitOutcome::Ignored;
        }
        if symbol >= self.config.alphabet_size {
            log::warn!(
                "input {symbol} outside alphabet [0, {}) ignored",
                self.config.alphabet_size
            );
            return SubmitOutcome::Ignored;
        }
        // Degenerate opening_draw=0 round: nothing to match against
        if self.session.sequence.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.session.player_input.push(symbol);
        let position = self.session.player_input.len() - 1;

        if self.session.sequence.get(position) != Some(&symbol) {
            self.session.phase = GamePhase::Failed;
            log::info!(
                "wrong symbol at position {position}: game over at level {} with score {}",
                self.session.level,
                self.session.score
            );
            return SubmitOutcome::Mismatch {
                score: self.session.score,
                level: self.session.level,
            };
        }

        if self.session.player_input.len() == self.session.sequence.len() {
            self.session.score += u64::from(self.session.level) * self.config.score_per_level;
            self.session.phase = GamePhase::RoundComplete;
            log::debug!(
                "round complete at level {}, score {}",
                self.session.level,
                self.session.score
            );
            return SubmitOutcome::Complete(RoundSummary {
                score: self.session.score,
                level: self.session.level,
                sequence: self.session.sequence.clone(),
            });
        }

        SubmitOutcome::Partial {
            entered: self.session.player_input.len(),
            remaining: self.session.sequence.len() - self.session.player_input.len(),
        }
    }

    /// Move from a completed round to the next level
    ///
    /// Only valid from `RoundComplete`; otherwise a no-op returning `None`.
    /// Appends one new random symbol and regenerates the sound map, then
    /// returns to `Idle` awaiting the next `start_round`.
    pub fn advance_level(&mut self) -> Option<Standing> {
        if self.session.phase != GamePhase::RoundComplete {
            log::debug!("advance_level ignored in {:?}", self.session.phase);
            return None;
        }
        self.session.level += 1;
        self.sound_map = SoundMap::generate(&mut self.rng, self.config.alphabet_size);
        self.append_symbol();
        self.session.phase = GamePhase::Idle;
        Some(Standing {
            score: self.session.score,
            level: self.session.level,
        })
    }

    /// Draw one symbol uniformly from `[0, alphabet_size)`; repeats allowed
    fn append_symbol(&mut self) {
        let symbol = self.rng.random_range(0..self.config.alphabet_size);
        self.session.sequence.push(symbol);
    }
}
