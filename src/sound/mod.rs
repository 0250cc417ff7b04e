//! The `Sound` value type and its combination algebra.
//!
//! A `Sound` pairs an immutable sample buffer with descriptive metadata
//! (provenance, frequency, amplitude, duration, sample rate). Combinators
//! never mutate their operands; every operation allocates and returns a new
//! value, and every returned buffer satisfies the [-1.0, 1.0] range
//! invariant.

#[cfg(test)]
mod tests_generate;

use std::fmt;

use rand_pcg::Pcg32;

use crate::error::{SoundError, SoundResult};
use crate::waveform::{self, clamp_buffer, clamp_sample, peak, tile_to_length, Waveform};

/// Default frequency for constructed sounds, in Hz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 500.0;
/// Default peak amplitude for constructed sounds.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default duration for constructed sounds, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Frequency recorded on modulated sounds. A modulated buffer no longer
/// represents a single periodic tone, so the value is a placeholder.
pub const MODULATED_FREQUENCY_HZ: f64 = 100.0;

/// Provenance of a sound's buffer.
///
/// Debug metadata only: nothing branches on the tag after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Synthesized directly from a waveform shape.
    Generated(Waveform),
    /// Elementwise add/subtract/multiply of two sounds.
    Combined,
    /// Concatenation of two sounds.
    Joined,
    /// Scalar amplitude scaling.
    Scaled,
    /// Resampled multiplication of two sounds.
    Modulated,
    /// Delay by zero-padding the head.
    Shifted,
}

/// Number of samples for a given duration at a given rate.
pub(crate) fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).round() as usize
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Synthetic frequency for a derived sound: the least common multiple of the
/// integer-truncated operand frequencies. Undefined when either operand
/// truncates to zero.
fn lcm_frequency(a: f64, b: f64) -> SoundResult<f64> {
    let fa = a.trunc() as u64;
    let fb = b.trunc() as u64;
    if fa == 0 {
        return Err(SoundError::ZeroFrequency { freq: a });
    }
    if fb == 0 {
        return Err(SoundError::ZeroFrequency { freq: b });
    }
    Ok(((fa / gcd(fa, fb)) * fb) as f64)
}

#[derive(Debug, Clone, Copy)]
enum CombineOp {
    Add,
    Subtract,
    Multiply,
}

impl CombineOp {
    #[inline]
    fn apply(self, base: f64, overlay: f64) -> f64 {
        match self {
            CombineOp::Add => base + overlay,
            CombineOp::Subtract => base - overlay,
            CombineOp::Multiply => base * overlay,
        }
    }
}

/// Immutable sample buffer with descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    origin: Origin,
    frequency: f64,
    amplitude: f64,
    duration: f64,
    sample_rate: u32,
    samples: Vec<f64>,
}

impl Sound {
    /// Synthesizes a new sound.
    ///
    /// The buffer holds `round(duration * sample_rate)` samples and is
    /// assigned once, here; it is never mutated afterwards. Amplitude is
    /// clamped into [-1.0, 1.0] before synthesis. The RNG is consumed only
    /// by [`Waveform::Noise`].
    ///
    /// # Errors
    /// `InvalidFrequency` if `frequency` is not positive and finite,
    /// `InvalidDuration` if `duration` is negative or non-finite,
    /// `InvalidSampleRate` if `sample_rate` is zero.
    pub fn new(
        waveform: Waveform,
        frequency: f64,
        amplitude: f64,
        duration: f64,
        sample_rate: u32,
        rng: &mut Pcg32,
    ) -> SoundResult<Self> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(SoundError::InvalidFrequency { freq: frequency });
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(SoundError::InvalidDuration { duration });
        }
        if sample_rate == 0 {
            return Err(SoundError::InvalidSampleRate { rate: sample_rate });
        }

        let amplitude = clamp_sample(amplitude);
        let num_samples = sample_count(duration, sample_rate);
        let samples = waveform::generate(waveform, frequency, amplitude, num_samples, sample_rate, rng);

        Ok(Self {
            origin: Origin::Generated(waveform),
            frequency,
            amplitude,
            duration,
            sample_rate,
            samples,
        })
    }

    /// Synthesizes a sine tone.
    pub fn sine(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> SoundResult<Self> {
        let mut rng = crate::rng::create_rng(0); // deterministic shapes never sample the rng
        Self::new(Waveform::Sine, frequency, amplitude, duration, sample_rate, &mut rng)
    }

    /// Synthesizes a square wave.
    pub fn square(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> SoundResult<Self> {
        let mut rng = crate::rng::create_rng(0);
        Self::new(Waveform::Square, frequency, amplitude, duration, sample_rate, &mut rng)
    }

    /// Synthesizes a sawtooth wave.
    pub fn sawtooth(frequency: f64, amplitude: f64, duration: f64, sample_rate: u32) -> SoundResult<Self> {
        let mut rng = crate::rng::create_rng(0);
        Self::new(Waveform::Sawtooth, frequency, amplitude, duration, sample_rate, &mut rng)
    }

    /// Synthesizes a constant (DC) level.
    pub fn constant(amplitude: f64, duration: f64, sample_rate: u32) -> SoundResult<Self> {
        let mut rng = crate::rng::create_rng(0);
        Self::new(
            Waveform::Constant,
            DEFAULT_FREQUENCY_HZ,
            amplitude,
            duration,
            sample_rate,
            &mut rng,
        )
    }

    /// Synthesizes white noise from the given deterministic RNG.
    ///
    /// The samples span the full [-1.0, 1.0] range; `amplitude` is recorded
    /// as metadata only. Apply [`Sound::scale`] to attenuate.
    pub fn noise(amplitude: f64, duration: f64, sample_rate: u32, rng: &mut Pcg32) -> SoundResult<Self> {
        Self::new(Waveform::Noise, DEFAULT_FREQUENCY_HZ, amplitude, duration, sample_rate, rng)
    }

    /// Derived-sound constructor: duration follows the buffer length,
    /// amplitude is the buffer's signed maximum.
    fn derived(origin: Origin, frequency: f64, sample_rate: u32, samples: Vec<f64>) -> Self {
        let duration = samples.len() as f64 / sample_rate as f64;
        let amplitude = peak(&samples);
        Self {
            origin,
            frequency,
            amplitude,
            duration,
            sample_rate,
            samples,
        }
    }

    /// Provenance tag.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Frequency in Hz. Synthetic for derived sounds.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Peak amplitude recorded at construction time.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The sample buffer.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples in the buffer.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    fn check_rate(&self, other: &Self) -> SoundResult<()> {
        if self.sample_rate != other.sample_rate {
            return Err(SoundError::SampleRateMismatch {
                left: self.sample_rate,
                right: other.sample_rate,
            });
        }
        Ok(())
    }

    /// Elementwise combination under the pad-by-truncation rule.
    ///
    /// The longer buffer (ties: the receiver) is copied as the base; the op
    /// is applied between the base's prefix and the shorter buffer, leaving
    /// the tail untouched. The base is always the left-hand side of the op,
    /// so subtraction direction follows buffer length, not argument order.
    fn combine(&self, other: &Self, op: CombineOp) -> SoundResult<Self> {
        self.check_rate(other)?;
        let frequency = lcm_frequency(self.frequency, other.frequency)?;

        let (base, overlay) = if self.samples.len() >= other.samples.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut samples = base.samples.clone();
        for (s, &o) in samples.iter_mut().zip(overlay.samples.iter()) {
            *s = op.apply(*s, o);
        }
        clamp_buffer(&mut samples);

        Ok(Self::derived(Origin::Combined, frequency, self.sample_rate, samples))
    }

    /// Elementwise sum of two sounds.
    ///
    /// # Errors
    /// `SampleRateMismatch` for operands at different rates, `ZeroFrequency`
    /// when either operand frequency truncates to zero.
    pub fn add(&self, other: &Self) -> SoundResult<Self> {
        self.combine(other, CombineOp::Add)
    }

    /// Elementwise difference (longer buffer minus shorter).
    pub fn subtract(&self, other: &Self) -> SoundResult<Self> {
        self.combine(other, CombineOp::Subtract)
    }

    /// Elementwise product of two sounds.
    pub fn multiply(&self, other: &Self) -> SoundResult<Self> {
        self.combine(other, CombineOp::Multiply)
    }

    /// Scales the amplitude by a scalar factor.
    ///
    /// The factor saturates into [-1.0, 1.0] and negative factors floor to
    /// zero (an asymmetric clamp, kept intentionally), so the result is
    /// always an attenuation. Frequency and duration are unchanged.
    pub fn scale(&self, factor: f64) -> Self {
        let factor = clamp_sample(factor).max(0.0);
        let mut samples: Vec<f64> = self.samples.iter().map(|s| s * factor).collect();
        clamp_buffer(&mut samples);
        Self {
            origin: Origin::Scaled,
            frequency: self.frequency,
            amplitude: clamp_sample(self.amplitude * factor),
            duration: self.duration,
            sample_rate: self.sample_rate,
            samples,
        }
    }

    /// Concatenates two sounds, no crossfade.
    ///
    /// # Errors
    /// `SampleRateMismatch` for operands at different rates, `ZeroFrequency`
    /// when either operand frequency truncates to zero.
    pub fn join(&self, other: &Self) -> SoundResult<Self> {
        self.check_rate(other)?;
        let frequency = lcm_frequency(self.frequency, other.frequency)?;

        let mut samples = self.samples.clone();
        samples.extend_from_slice(&other.samples);
        let amplitude = peak(&samples);

        Ok(Self {
            origin: Origin::Joined,
            frequency,
            amplitude,
            duration: self.duration + other.duration,
            sample_rate: self.sample_rate,
            samples,
        })
    }

    /// Resampled multiplication: the shorter buffer is tiled cyclically to
    /// the longer's length, then the buffers are multiplied elementwise.
    ///
    /// The result's frequency is the [`MODULATED_FREQUENCY_HZ`] placeholder.
    ///
    /// # Errors
    /// `SampleRateMismatch` for operands at different rates.
    pub fn modulate(&self, other: &Self) -> SoundResult<Self> {
        self.check_rate(other)?;

        let (longer, shorter) = if self.samples.len() >= other.samples.len() {
            (self, other)
        } else {
            (other, self)
        };

        let resized = tile_to_length(&shorter.samples, longer.samples.len());
        let mut samples: Vec<f64> = longer
            .samples
            .iter()
            .zip(resized.iter())
            .map(|(a, b)| a * b)
            .collect();
        clamp_buffer(&mut samples);

        Ok(Self::derived(
            Origin::Modulated,
            MODULATED_FREQUENCY_HZ,
            self.sample_rate,
            samples,
        ))
    }

    /// Delays the sound by `num_samples`: the head is zero-padded and the
    /// trailing `num_samples` samples are dropped. Not a rotation.
    ///
    /// A shift of the full buffer length or more yields silence of the same
    /// length. Metadata is unchanged apart from the buffer.
    pub fn shift(&self, num_samples: usize) -> Self {
        let len = self.samples.len();
        let n = num_samples.min(len);
        let mut samples = vec![0.0; n];
        samples.extend_from_slice(&self.samples[..len - n]);
        Self {
            origin: Origin::Shifted,
            frequency: self.frequency,
            amplitude: self.amplitude,
            duration: self.duration,
            sample_rate: self.sample_rate,
            samples,
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} Hz, amp {:.3}, {:.3} s ({} samples at {} Hz)",
            self.origin,
            self.frequency,
            self.amplitude,
            self.duration,
            self.samples.len(),
            self.sample_rate
        )
    }
}
