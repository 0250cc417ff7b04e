//! Musical note frequencies and tempo arithmetic.
//!
//! Frequencies follow the octave-doubling rule: the same note name one
//! octave up has twice the frequency, so the table only stores octave 1.

use crate::error::{SoundError, SoundResult};

/// Chromatic note names, octave-agnostic.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Frequencies of the first octave, in Hz, matching [`NOTE_NAMES`].
pub const OCTAVE1_FREQUENCIES: [f64; 12] = [
    32.70, 34.65, 36.71, 38.89, 41.20, 43.65, 46.25, 49.00, 51.91, 55.00, 58.27, 61.74,
];

/// Length of a whole note, in eighth notes.
pub const WHOLE_NOTE: u32 = 8;
/// Length of a half note, in eighth notes.
pub const HALF_NOTE: u32 = 4;
/// Length of a quarter note, in eighth notes.
pub const QUARTER_NOTE: u32 = 2;
/// Length of an eighth note, the smallest supported note length.
pub const EIGHTH_NOTE: u32 = 1;

/// Maximum length of a score, in whole notes.
pub const MAX_WHOLE_NOTES: u32 = 16;
/// Maximum number of eighth notes in a score.
pub const MAX_EIGHTH_NOTES: u32 = MAX_WHOLE_NOTES * WHOLE_NOTE;

fn note_index(name: &str) -> SoundResult<usize> {
    NOTE_NAMES
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| SoundError::UnknownNote {
            name: name.to_string(),
        })
}

/// Frequency of a note in a given octave.
///
/// # Errors
/// `UnknownNote` if `name` is not one of [`NOTE_NAMES`].
pub fn note_frequency(name: &str, octave: i32) -> SoundResult<f64> {
    let base = OCTAVE1_FREQUENCIES[note_index(name)?];
    Ok(base * 2.0_f64.powi(octave - 1))
}

/// Transposes a note by a number of half steps (positive = up).
///
/// The note index wraps modulo 12 with the octave carrying the overflow.
///
/// # Errors
/// `UnknownNote` if `name` is not one of [`NOTE_NAMES`].
pub fn pitch_shifted(name: &str, octave: i32, half_steps: i32) -> SoundResult<(&'static str, i32)> {
    let idx = note_index(name)? as i32 + half_steps;
    let new_name = NOTE_NAMES[idx.rem_euclid(12) as usize];
    Ok((new_name, octave + idx.div_euclid(12)))
}

/// Duration of an eighth note in seconds at the given tempo (beats per
/// minute, one beat per quarter note).
pub fn eighth_note_duration(tempo_bpm: f64) -> f64 {
    30.0 / tempo_bpm
}

/// Number of samples needed to fill `millis` milliseconds at the given rate
/// (truncating).
pub fn samples_for_millis(millis: f64, sample_rate: u32) -> usize {
    (millis / (1000.0 / sample_rate as f64)) as usize
}
