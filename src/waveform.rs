//! Waveform generation (sine, square, sawtooth, constant, white noise).
//!
//! Periodic shapes are synthesized as a single cycle and then tiled
//! cyclically to the requested length, truncating the final repetition.
//! Non-integer cycle lengths therefore produce a small phase discontinuity
//! at each tile boundary; this is accepted behavior.

use rand::Rng;
use rand_pcg::Pcg32;
use std::f64::consts::PI;

/// Full circle in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Canonical waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Pure sine tone.
    Sine,
    /// Square wave (sign of the sine).
    Square,
    /// Descending sawtooth.
    Sawtooth,
    /// Constant (DC) level.
    Constant,
    /// White noise, uniform in [-1, 1].
    Noise,
}

/// Saturates a single sample into [-1.0, 1.0].
#[inline]
pub fn clamp_sample(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Saturates every sample in a buffer into [-1.0, 1.0].
pub fn clamp_buffer(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = clamp_sample(*sample);
    }
}

/// Signed maximum of a buffer (not the absolute peak); 0.0 for an empty
/// buffer.
pub fn peak(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().copied().fold(f64::MIN, f64::max)
}

/// Mathematical sign: -1, 0 or +1. Unlike `f64::signum`, zero maps to zero;
/// this is the square wave's documented tie-break.
#[inline]
fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

/// Repeats a single-cycle buffer cyclically to fill `len` samples,
/// truncating the last repetition. An empty cycle yields silence.
pub fn tile_to_length(cycle: &[f64], len: usize) -> Vec<f64> {
    if cycle.is_empty() {
        return vec![0.0; len];
    }
    (0..len).map(|i| cycle[i % cycle.len()]).collect()
}

/// Number of samples in one cycle and the per-sample phase step.
///
/// The sample count truncates `sample_rate / frequency`; the phase step is
/// computed from the untruncated cycle length, so a non-integer cycle ends
/// slightly short of a full period.
fn phase_steps(frequency: f64, sample_rate: u32) -> (usize, f64) {
    let cycle_len = sample_rate as f64 / frequency;
    (cycle_len.trunc() as usize, TWO_PI / cycle_len)
}

/// One cycle of a sine wave scaled by `amplitude`.
pub fn sine_cycle(frequency: f64, amplitude: f64, sample_rate: u32) -> Vec<f64> {
    let (count, omega) = phase_steps(frequency, sample_rate);
    (0..count)
        .map(|i| amplitude * (i as f64 * omega).sin())
        .collect()
}

/// One cycle of a square wave: `amplitude * sign(sine)`, with `sign(0) = 0`.
pub fn square_cycle(frequency: f64, amplitude: f64, sample_rate: u32) -> Vec<f64> {
    sine_cycle(frequency, amplitude, sample_rate)
        .into_iter()
        .map(|s| amplitude * sign(s))
        .collect()
}

/// One cycle of a descending sawtooth: sample i = `amplitude * (1 - i*omega/pi)`.
pub fn sawtooth_cycle(frequency: f64, amplitude: f64, sample_rate: u32) -> Vec<f64> {
    let (count, omega) = phase_steps(frequency, sample_rate);
    (0..count)
        .map(|i| amplitude * (1.0 - i as f64 * omega / PI))
        .collect()
}

/// Generates `num_samples` samples of the given waveform.
///
/// # Arguments
/// * `waveform` - Shape to synthesize
/// * `frequency` - Frequency in Hz (ignored by Constant and Noise)
/// * `amplitude` - Peak amplitude; Noise ignores it and spans [-1, 1]
/// * `num_samples` - Number of samples to generate
/// * `sample_rate` - Sample rate in Hz
/// * `rng` - Deterministic RNG, consumed only by Noise
///
/// # Returns
/// Vector of samples, every element clamped into [-1.0, 1.0].
pub fn generate(
    waveform: Waveform,
    frequency: f64,
    amplitude: f64,
    num_samples: usize,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let mut samples = match waveform {
        Waveform::Sine => tile_to_length(&sine_cycle(frequency, amplitude, sample_rate), num_samples),
        Waveform::Square => {
            tile_to_length(&square_cycle(frequency, amplitude, sample_rate), num_samples)
        }
        Waveform::Sawtooth => tile_to_length(
            &sawtooth_cycle(frequency, amplitude, sample_rate),
            num_samples,
        ),
        Waveform::Constant => vec![amplitude; num_samples],
        Waveform::Noise => (0..num_samples)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect(),
    };

    // Defensive post-condition: amplitude is pre-clamped at construction, but
    // boundary-amplitude arithmetic can exceed the range by rounding.
    clamp_buffer(&mut samples);
    samples
}
