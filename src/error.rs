//! Error types for sound synthesis and combination.

use thiserror::Error;

/// Result type for sound operations.
pub type SoundResult<T> = Result<T, SoundError>;

/// Errors that can occur during sound construction or combination.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Invalid frequency (must be positive and finite).
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid duration (must be non-negative and finite).
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate (must be positive).
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Frequency truncates to zero, so the combined frequency (an integer
    /// least common multiple) is undefined.
    #[error("frequency {freq} Hz truncates to zero; combined frequency is undefined")]
    ZeroFrequency {
        /// The offending operand frequency.
        freq: f64,
    },

    /// Operands were generated at different sample rates.
    #[error("sample rate mismatch: {left} vs {right}")]
    SampleRateMismatch {
        /// Sample rate of the left operand.
        left: u32,
        /// Sample rate of the right operand.
        right: u32,
    },

    /// Note name not in the chromatic table.
    #[error("unknown note name: {name}")]
    UnknownNote {
        /// The unrecognized note name.
        name: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// JSON parse error in a sound recipe.
    #[error("recipe parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SoundError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
