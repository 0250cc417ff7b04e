//! Deterministic WAV file writer.
//!
//! Writes 16-bit PCM mono WAV files with no timestamps or variable metadata,
//! so identical samples always produce identical bytes. The float-to-PCM
//! conversion takes an explicit gain multiplier: [`FULL_SCALE_GAIN`] maps a
//! full-range signal onto the whole i16 range, while [`LEGACY_GAIN`] keeps
//! the historical quiet under-scaling some callers depend on.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sound::Sound;

/// Gain mapping [-1.0, 1.0] onto the full signed 16-bit range.
pub const FULL_SCALE_GAIN: f64 = 32767.0;

/// The historical fixed multiplier, far below full scale. Kept selectable
/// rather than silently corrected.
pub const LEGACY_GAIN: f64 = 10000.0;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1; stereo is out of scope).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f64 samples to 16-bit PCM bytes with the given gain.
///
/// Each sample is multiplied by `gain`, rounded, and saturated into
/// [-32767, 32767] before the cast, so out-of-range inputs clip rather than
/// wrap.
pub fn samples_to_pcm16(samples: &[f64], gain: f64) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let pcm_value = (sample * gain).round().clamp(-32767.0, 32767.0) as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Mono WAV file writer with a configurable export gain.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
    gain: f64,
}

impl WavWriter {
    /// Creates a mono writer with [`FULL_SCALE_GAIN`].
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
            gain: FULL_SCALE_GAIN,
        }
    }

    /// Sets the export gain.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Writes samples to a byte vector.
    pub fn write(&self, samples: &[f64]) -> Vec<u8> {
        let pcm = samples_to_pcm16(samples, self.gain);
        write_wav_to_vec(&self.format, &pcm)
    }

    /// Writes samples to a file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, samples: &[f64]) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&self.write(samples))
    }

    /// Returns the BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[f64]) -> String {
        let pcm = samples_to_pcm16(samples, self.gain);
        blake3::hash(&pcm).to_hex().to_string()
    }
}

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from raw samples.
    pub fn from_samples(samples: &[f64], sample_rate: u32, gain: f64) -> Self {
        let pcm = samples_to_pcm16(samples, gain);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Creates a WavResult from a [`Sound`], using its own sample rate.
    pub fn from_sound(sound: &Sound, gain: f64) -> Self {
        Self::from_samples(sound.samples(), sound.sample_rate(), gain)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the PCM hash of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
