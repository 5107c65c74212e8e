//! Shape Echo - a sequence-memory (Simon) rules engine
//!
//! Core modules:
//! - `game`: Deterministic rules engine (state machine, scoring, growth)
//! - `sound`: Per-symbol tone parameters for an audio collaborator
//! - `presenter`: Timed playback plans for a presentation collaborator
//! - `config`: Data-driven game tuning
//! - `highscores`: Top-10 leaderboard
//!
//! The engine is synchronous and timer-free. Collaborators drive it through
//! discrete calls: present a round snapshot, report playback completion,
//! feed player input one symbol at a time.

pub mod config;
pub mod game;
pub mod highscores;
pub mod presenter;
pub mod sound;

pub use config::{GameConfig, Pacing};
pub use game::{GamePhase, GameSession, RoundSummary, SequenceGame, Standing, SubmitOutcome, Symbol};
pub use highscores::HighScores;
pub use presenter::{PresentationPlan, PresentationStep};
pub use sound::{SoundMap, ToneSpec, Waveform};

/// Game configuration constants
pub mod consts {
    /// Number of distinct symbols (shapes/colors) in the default game
    pub const DEFAULT_ALPHABET_SIZE: u8 = 4;
    /// Points per completed round are `level * SCORE_PER_LEVEL`
    pub const SCORE_PER_LEVEL: u64 = 10;
    /// Symbols drawn for the first round after a reset
    pub const OPENING_DRAW: u32 = 2;

    /// Milliseconds between sequence elements during playback
    pub const SEQUENCE_INTERVAL_MS: u32 = 1000;
    /// Milliseconds a symbol stays highlighted
    pub const HIGHLIGHT_MS: u32 = 500;
    /// Milliseconds between a completed round and the next playback
    pub const NEXT_ROUND_DELAY_MS: u32 = 1500;

    /// Generated tone frequencies fall in `[BASE, BASE + SPAN)` Hz
    pub const TONE_FREQ_BASE: f32 = 200.0;
    pub const TONE_FREQ_SPAN: f32 = 800.0;
    /// Generated tone durations fall in `[BASE, BASE + SPAN)` seconds
    pub const TONE_DURATION_BASE: f32 = 0.3;
    pub const TONE_DURATION_SPAN: f32 = 0.4;
}
