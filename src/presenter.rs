//! Playback scheduling for presentation collaborators
//!
//! The engine owns no timers. A presenter takes a [`PresentationPlan`],
//! executes the steps with whatever clock it has (animation frames, a
//! tokio interval, a test loop), and reports completion via
//! [`SequenceGame::finish_presentation`](crate::game::SequenceGame::finish_presentation).
//! Steps must be played in order with no reordering or dropping.

use serde::{Deserialize, Serialize};

use crate::config::Pacing;
use crate::game::Symbol;
use crate::sound::{SoundMap, ToneSpec};

/// One timed highlight-plus-tone in a playback run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationStep {
    /// Position within the sequence
    pub index: usize,
    /// Symbol to highlight
    pub symbol: Symbol,
    /// Tone to play, if the sound map covers the symbol
    pub tone: Option<ToneSpec>,
    /// Offset from playback start (ms)
    pub start_ms: u32,
    /// How long the highlight lasts (ms)
    pub highlight_ms: u32,
}

/// A full playback schedule for one sequence snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PresentationPlan {
    steps: Vec<PresentationStep>,
    total_ms: u32,
}

impl PresentationPlan {
    /// Lay a snapshot out on the pacing grid
    pub fn build(sequence: &[Symbol], sound_map: &SoundMap, pacing: &Pacing) -> Self {
        let steps: Vec<PresentationStep> = sequence
            .iter()
            .enumerate()
            .map(|(index, &symbol)| PresentationStep {
                index,
                symbol,
                tone: sound_map.tone(symbol).copied(),
                start_ms: index as u32 * pacing.sequence_interval_ms,
                highlight_ms: pacing.highlight_ms,
            })
            .collect();
        let total_ms = steps
            .last()
            .map(|step| step.start_ms + step.highlight_ms)
            .unwrap_or(0);
        Self { steps, total_ms }
    }

    pub fn steps(&self) -> &[PresentationStep] {
        &self.steps
    }

    /// When the last highlight ends; the earliest sensible moment for the
    /// presenter to report completion. Zero for an empty snapshot, in which
    /// case completion should be reported immediately.
    pub fn total_ms(&self) -> u32 {
        self.total_ms
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_map() -> SoundMap {
        SoundMap::generate(&mut Pcg32::seed_from_u64(1), 4)
    }

    #[test]
    fn test_plan_spaces_steps_on_interval() {
        let plan = PresentationPlan::build(&[1, 3, 0, 2], &test_map(), &Pacing::default());
        assert_eq!(plan.steps().len(), 4);
        for (i, step) in plan.steps().iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.start_ms, i as u32 * 1000);
            assert_eq!(step.highlight_ms, 500);
            assert!(step.tone.is_some());
        }
        assert_eq!(plan.total_ms(), 3000 + 500);
    }

    #[test]
    fn test_plan_preserves_snapshot_order() {
        let sequence = [2, 2, 1, 0, 3];
        let plan = PresentationPlan::build(&sequence, &test_map(), &Pacing::default());
        let played: Vec<u8> = plan.steps().iter().map(|s| s.symbol).collect();
        assert_eq!(played, sequence);
    }

    #[test]
    fn test_empty_snapshot_plan() {
        let plan = PresentationPlan::build(&[], &test_map(), &Pacing::default());
        assert!(plan.is_empty());
        assert_eq!(plan.total_ms(), 0);
    }

    #[test]
    fn test_symbol_without_tone() {
        // Map built for a smaller alphabet than the sequence uses
        let small_map = SoundMap::generate(&mut Pcg32::seed_from_u64(1), 2);
        let plan = PresentationPlan::build(&[0, 3], &small_map, &Pacing::default());
        assert!(plan.steps()[0].tone.is_some());
        assert!(plan.steps()[1].tone.is_none());
    }
}
