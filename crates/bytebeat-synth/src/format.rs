//! Audio format parameters and validation.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// PCM format parameters for one generate-encode cycle.
///
/// Rate and duration are kept as `i32` to match the 32-bit sample clock the
/// formulas run on; validation rejects non-positive values before any
/// arithmetic sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: i32,
    /// Duration in whole seconds.
    pub duration_seconds: i32,
    /// Bits per sample (always 8 for this system).
    pub bits_per_sample: u16,
    /// Number of channels (always 1 for this system).
    pub channels: u16,
}

impl AudioFormat {
    /// Creates an 8-bit mono format.
    pub fn mono8(sample_rate: i32, duration_seconds: i32) -> Self {
        Self {
            sample_rate,
            duration_seconds,
            bits_per_sample: 8,
            channels: 1,
        }
    }

    /// Checks that the format describes a representable sample buffer.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.sample_rate <= 0 {
            return Err(FormatError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.duration_seconds <= 0 {
            return Err(FormatError::InvalidDuration {
                seconds: self.duration_seconds,
            });
        }
        let total = self.sample_rate as i64 * self.duration_seconds as i64;
        if total > i32::MAX as i64 {
            return Err(FormatError::SampleCountOverflow {
                rate: self.sample_rate,
                seconds: self.duration_seconds,
            });
        }
        Ok(())
    }

    /// Total number of samples for this format.
    pub fn total_samples(&self) -> Result<usize, FormatError> {
        self.validate()?;
        Ok(self.sample_rate as usize * self.duration_seconds as usize)
    }

    /// Bytes per complete sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes of PCM data per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate as u32 * self.block_align() as u32
    }
}
