//! bleep — deterministic waveform synthesis and a sound-combination algebra.
//!
//! # Overview
//!
//! The crate synthesizes fixed-duration sample buffers for canonical
//! waveform shapes (sine, square, sawtooth, constant, white noise) and
//! composes them through a small algebra:
//!
//! - **add / subtract / multiply** - elementwise combination under a
//!   pad-by-truncation rule (the longer buffer's tail survives untouched)
//! - **scale** - scalar attenuation with a saturating, negative-flooring factor
//! - **join** - concatenation
//! - **modulate** - resampled multiplication (the shorter buffer is tiled to
//!   the longer's length)
//! - **shift** - delay with a zero-padded head
//!
//! Every buffer returned by a generator or combinator keeps its samples in
//! [-1.0, 1.0], and combinators never mutate their operands. The result can
//! be serialized to a 16-bit mono WAV file with a configurable export gain.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Noise draws from a caller-supplied PCG32
//! generator ([`rng::create_rng`]); recipe-driven construction derives
//! per-component seeds via BLAKE3, so the same params and seed always
//! produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use bleep::{Sound, WavResult, DEFAULT_SAMPLE_RATE};
//!
//! # fn main() -> bleep::SoundResult<()> {
//! let root = Sound::square(400.0, 0.2, 3.0, DEFAULT_SAMPLE_RATE)?;
//! let third = Sound::square(500.0, 0.2, 3.0, DEFAULT_SAMPLE_RATE)?;
//! let chord = root.add(&third)?;
//!
//! let tremolo = Sound::square(3.0, 1.0, 3.0, DEFAULT_SAMPLE_RATE)?;
//! let shaped = tremolo.modulate(&chord)?;
//!
//! let wav = WavResult::from_sound(&shaped, bleep::wav::FULL_SCALE_GAIN);
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`sound`] - the [`Sound`] value type and combination algebra
//! - [`waveform`] - waveform generators
//! - [`params`] - serde-deserializable construction recipes
//! - [`notes`] - musical note frequencies and tempo arithmetic
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`wav`] - deterministic WAV file writer

pub mod error;
pub mod notes;
pub mod params;
pub mod rng;
pub mod sound;
pub mod waveform;
pub mod wav;

// Re-export main types at crate root
pub use error::{SoundError, SoundResult};
pub use params::SoundParams;
pub use sound::{Origin, Sound};
pub use waveform::Waveform;
pub use wav::{WavResult, WavWriter};

/// Default overall sampling rate, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 11250;
