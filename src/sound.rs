//! Per-symbol tone parameters
//!
//! Pure data for an audio collaborator; nothing here makes noise. The
//! engine regenerates the map on reset and level-up so every run gets a
//! fresh set of tones, without any bearing on game correctness.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::game::Symbol;

/// Oscillator shape for a generated tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Web Audio oscillator type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

/// One symbol's tone: frequency (Hz), shape, duration (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub frequency: f32,
    pub waveform: Waveform,
    pub duration: f32,
}

/// Tones for every symbol in the alphabet, indexed by symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SoundMap {
    tones: Vec<ToneSpec>,
}

impl SoundMap {
    /// Draw a fresh map from the session RNG
    pub fn generate<R: Rng>(rng: &mut R, alphabet_size: u8) -> Self {
        let tones = (0..alphabet_size)
            .map(|_| ToneSpec {
                frequency: TONE_FREQ_BASE + rng.random::<f32>() * TONE_FREQ_SPAN,
                waveform: Waveform::ALL[rng.random_range(0..Waveform::ALL.len())],
                duration: TONE_DURATION_BASE + rng.random::<f32>() * TONE_DURATION_SPAN,
            })
            .collect();
        Self { tones }
    }

    /// Tone for a symbol, `None` if the symbol is outside the alphabet
    pub fn tone(&self, symbol: Symbol) -> Option<&ToneSpec> {
        self.tones.get(usize::from(symbol))
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_covers_alphabet_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(17);
        let map = SoundMap::generate(&mut rng, 4);
        assert_eq!(map.len(), 4);
        for symbol in 0..4 {
            let tone = map.tone(symbol).unwrap();
            assert!((200.0..1000.0).contains(&tone.frequency));
            assert!((0.3..0.7).contains(&tone.duration));
        }
        assert!(map.tone(4).is_none());
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let a = SoundMap::generate(&mut Pcg32::seed_from_u64(8), 4);
        let b = SoundMap::generate(&mut Pcg32::seed_from_u64(8), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_waveform_names() {
        assert_eq!(Waveform::Sine.as_str(), "sine");
        assert_eq!(Waveform::Sawtooth.as_str(), "sawtooth");
    }
}
