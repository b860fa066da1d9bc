//! Error types for waveform generation and WAV encoding.

use thiserror::Error;

/// Errors raised while validating an [`AudioFormat`](crate::AudioFormat).
///
/// All variants are detected before any samples are produced; a caller
/// never receives a partial buffer alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Sample rate is zero or negative.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: i32,
    },

    /// Duration is zero or negative.
    #[error("invalid duration: {seconds} seconds")]
    InvalidDuration {
        /// The rejected duration.
        seconds: i32,
    },

    /// `sample_rate * duration_seconds` does not fit the 32-bit sample clock.
    #[error("total sample count overflows the 32-bit sample clock: {rate} Hz * {seconds} s")]
    SampleCountOverflow {
        /// Sample rate of the rejected format.
        rate: i32,
        /// Duration of the rejected format.
        seconds: i32,
    },
}

/// Errors raised by the WAV encoder before any bytes are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The sample buffer is empty.
    #[error("cannot encode an empty sample buffer")]
    EmptyData,

    /// The format is invalid (propagated from format validation).
    #[error(transparent)]
    Format(#[from] FormatError),
}
