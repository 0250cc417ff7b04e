//! Declarative sound construction parameters.
//!
//! A `SoundParams` value is the JSON-facing description of a generated
//! sound. Omitted fields fall back to the construction defaults (500 Hz,
//! amplitude 1.0, 5 seconds). Noise gets its random stream from a
//! BLAKE3-derived component seed, so building the same params with the same
//! seed is byte-identical.

use serde::{Deserialize, Serialize};

use crate::error::SoundResult;
use crate::rng::create_component_rng;
use crate::sound::{Sound, DEFAULT_AMPLITUDE, DEFAULT_DURATION_SECS, DEFAULT_FREQUENCY_HZ};
use crate::waveform::Waveform;

fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY_HZ
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECS
}

/// Parameters for synthesizing a single sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundParams {
    /// Waveform shape.
    pub waveform: Waveform,
    /// Frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Peak amplitude in [-1.0, 1.0].
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
}

impl SoundParams {
    /// Parses params from a JSON string.
    pub fn from_json(json: &str) -> SoundResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Synthesizes the described sound.
    ///
    /// Noise draws from an RNG seeded with `derive_component_seed(seed,
    /// "noise")`; deterministic shapes ignore the seed entirely.
    pub fn build(&self, sample_rate: u32, seed: u32) -> SoundResult<Sound> {
        let mut rng = create_component_rng(seed, "noise");
        Sound::new(
            self.waveform,
            self.frequency,
            self.amplitude,
            self.duration,
            sample_rate,
            &mut rng,
        )
    }
}
