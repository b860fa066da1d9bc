//! Waveform generation entry points.
//!
//! Generation is a pure function of `(formula, format)`: validate the
//! format, evaluate the formula at every sample index, and hand the buffer
//! to the WAV encoder. There is no shared state, so different formulas may
//! run on separate threads without coordination.

use crate::error::{EncodeError, FormatError};
use crate::format::AudioFormat;
use crate::formula::Formula;
use crate::wav::WavResult;

/// Result of a render (generate + encode) cycle.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The formula that was rendered.
    pub formula: Formula,
    /// Encoded WAV file and PCM hash.
    pub wav: WavResult,
}

/// Generates the sample buffer for a formula.
///
/// Fails atomically on an invalid format; a partial buffer is never
/// returned. The buffer holds exactly `sample_rate * duration_seconds`
/// unsigned 8-bit samples.
pub fn generate(formula: Formula, format: &AudioFormat) -> Result<Vec<u8>, FormatError> {
    let total_samples = format.total_samples()?;

    let mut samples = Vec::with_capacity(total_samples);
    for t in 0..total_samples as i32 {
        samples.push(formula.sample(t, format.sample_rate));
    }

    Ok(samples)
}

/// Generates a formula's waveform and encodes it as a WAV byte buffer.
pub fn render(formula: Formula, format: &AudioFormat) -> Result<RenderResult, EncodeError> {
    let samples = generate(formula, format)?;
    let wav = WavResult::from_samples(&samples, format)?;

    Ok(RenderResult { formula, wav })
}

/// Renders a formula at its default format.
pub fn render_default(formula: Formula) -> Result<RenderResult, EncodeError> {
    render(formula, &formula.default_format())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_generate_length_matches_format() {
        for formula in Formula::ALL {
            let format = AudioFormat::mono8(1000, 2);
            let samples = generate(formula, &format).unwrap();
            assert_eq!(samples.len(), 2000, "formula = {}", formula);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let format = AudioFormat::mono8(4000, 3);
        for formula in Formula::ALL {
            let first = generate(formula, &format).unwrap();
            let second = generate(formula, &format).unwrap();
            assert_eq!(first, second, "formula = {}", formula);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_format() {
        let err = generate(Formula::Glitch, &AudioFormat::mono8(0, 23)).unwrap_err();
        assert_eq!(err, FormatError::InvalidSampleRate { rate: 0 });

        let err = generate(Formula::Glitch, &AudioFormat::mono8(10000, -1)).unwrap_err();
        assert_eq!(err, FormatError::InvalidDuration { seconds: -1 });
    }

    #[test]
    fn test_sine_recurs_after_eleven_periods() {
        // 220 Hz at 8000 Hz: 400 samples span exactly 11 periods, so the
        // sequence recurs with at most 1 LSB of float rounding drift.
        let samples = generate(Formula::SineTone, &AudioFormat::mono8(8000, 1)).unwrap();
        for t in 0..samples.len() - 400 {
            let diff = (samples[t] as i16 - samples[t + 400] as i16).abs();
            assert!(diff <= 1, "t = {}: {} vs {}", t, samples[t], samples[t + 400]);
        }
    }

    #[test]
    fn test_render_produces_header_plus_data() {
        let format = AudioFormat::mono8(1000, 1);
        let result = render(Formula::Tunnel, &format).unwrap();

        assert_eq!(result.formula, Formula::Tunnel);
        assert_eq!(result.wav.wav_data.len(), 44 + 1000);
        assert_eq!(result.wav.num_samples, 1000);
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
    }

    #[test]
    fn test_render_default_uses_variant_format() {
        let result = render_default(Formula::Icons).unwrap();
        assert_eq!(result.wav.sample_rate, 16000);
        assert_eq!(result.wav.num_samples, 64_000);
    }
}
