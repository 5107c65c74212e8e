//! Deterministic rules engine
//!
//! All game rules live here. This module must stay pure and synchronous:
//! - Seeded RNG only
//! - No timers or callbacks; playback pacing belongs to the presenter
//! - Invalid-state calls are benign no-ops, never panics

pub mod engine;
pub mod state;

pub use engine::{RoundSummary, SequenceGame, Standing, SubmitOutcome};
pub use state::{GamePhase, GameSession, RngState, Symbol};
