//! Data-driven game tuning
//!
//! Rules knobs live in [`GameConfig`], presentation timing in [`Pacing`].
//! Both are plain serde structs so a host can persist or hot-swap them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rules tuning for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct symbols the sequence draws from (K)
    pub alphabet_size: u8,
    /// Points per completed round are `level * score_per_level`
    pub score_per_level: u64,
    /// Symbols drawn for the first round after a reset; every later level
    /// appends exactly one. With the default of 2, a sequence has
    /// `level + 1` symbols at the end of each completed level.
    pub opening_draw: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            score_per_level: SCORE_PER_LEVEL,
            opening_draw: OPENING_DRAW,
        }
    }
}

/// Presentation timing handed to the presenter collaborator
///
/// The engine never schedules anything itself; these values only shape the
/// [`PresentationPlan`](crate::presenter::PresentationPlan) a presenter
/// executes with its own clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Milliseconds between successive sequence elements
    pub sequence_interval_ms: u32,
    /// Milliseconds a symbol stays highlighted
    pub highlight_ms: u32,
    /// Milliseconds between a completed round and the next playback
    pub next_round_delay_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            sequence_interval_ms: SEQUENCE_INTERVAL_MS,
            highlight_ms: HIGHLIGHT_MS,
            next_round_delay_ms: NEXT_ROUND_DELAY_MS,
        }
    }
}
