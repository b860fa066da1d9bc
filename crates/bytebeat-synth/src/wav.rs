//! Canonical PCM WAV encoder.
//!
//! Writes the 44-byte RIFF/WAVE header followed by the raw sample bytes,
//! with no timestamps or variable metadata, so identical input always
//! produces byte-identical files. The BLAKE3 hash of the PCM data is
//! carried alongside the encoded bytes for determinism checks.

use std::io::{self, Write};

use crate::error::EncodeError;
use crate::format::AudioFormat;

/// Writes a complete WAV file to a writer.
///
/// Multi-byte header fields are little-endian; the sample bytes are copied
/// verbatim after the header.
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &AudioFormat,
    pcm_data: &[u8],
) -> io::Result<()> {
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
    writer.write_all(&(format.sample_rate as u32).to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Encodes a sample buffer into a complete WAV byte buffer.
///
/// Fails before emitting any bytes if `samples` is empty or `format` is
/// invalid; otherwise always succeeds.
pub fn encode(samples: &[u8], format: &AudioFormat) -> Result<Vec<u8>, EncodeError> {
    format.validate()?;
    if samples.is_empty() {
        return Err(EncodeError::EmptyData);
    }

    let mut buffer = Vec::with_capacity(44 + samples.len());
    write_wav(&mut buffer, format, samples).expect("writing to Vec should not fail");
    Ok(buffer)
}

/// Result of WAV encoding.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only (not the header).
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: i32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a sample buffer and records its PCM hash.
    pub fn from_samples(samples: &[u8], format: &AudioFormat) -> Result<Self, EncodeError> {
        let wav_data = encode(samples, format)?;
        let pcm_hash = blake3::hash(samples).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate: format.sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Duration of the encoded audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Extracts the PCM data from a WAV file buffer.
///
/// Walks the chunk list rather than assuming a 44-byte header, so files
/// from other writers can be inspected too. Returns `None` if the buffer
/// is not a RIFF/WAVE file with a complete `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

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
            let data_end = data_start.checked_add(chunk_size)?;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
            return None;
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the BLAKE3 PCM hash of a WAV file buffer.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn format_1s_8k() -> AudioFormat {
        AudioFormat::mono8(8000, 1)
    }

    #[test]
    fn test_header_layout() {
        let samples = vec![0x80u8; 100];
        let wav = encode(&samples, &format_1s_8k()).unwrap();

        assert_eq!(wav.len(), 44 + 100);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 136);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
        // PCM format tag, 1 channel
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
            8000
        );
        // byte rate == sample rate and block align == 1 for 8-bit mono
        assert_eq!(
            u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
            8000
        );
        assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 1);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 8);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 100);
        assert_eq!(&wav[44..], &samples[..]);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let samples: Vec<u8> = (0..=255).collect();
        let first = encode(&samples, &format_1s_8k()).unwrap();
        let second = encode(&samples, &format_1s_8k()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_rejects_empty_buffer() {
        assert_eq!(
            encode(&[], &format_1s_8k()),
            Err(EncodeError::EmptyData)
        );
    }

    #[test]
    fn test_encode_rejects_invalid_format() {
        let samples = vec![0u8; 10];
        let err = encode(&samples, &AudioFormat::mono8(0, 1)).unwrap_err();
        assert!(matches!(err, EncodeError::Format(_)));
    }

    #[test]
    fn test_wav_result_hash_and_duration() {
        let samples = vec![1u8, 2, 3, 4];
        let result = WavResult::from_samples(&samples, &format_1s_8k()).unwrap();

        assert_eq!(result.num_samples, 4);
        assert_eq!(result.sample_rate, 8000);
        assert_eq!(result.pcm_hash.len(), 64);
        assert!(result.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert!((result.duration_seconds() - 0.0005).abs() < 1e-12);
    }

    #[test]
    fn test_extract_pcm_data_round_trip() {
        let samples: Vec<u8> = (0..200).map(|i| (i * 7) as u8).collect();
        let wav = encode(&samples, &format_1s_8k()).unwrap();

        let pcm = extract_pcm_data(&wav).expect("should find data chunk");
        assert_eq!(pcm, &samples[..]);
        assert_eq!(
            compute_pcm_hash(&wav).unwrap(),
            blake3::hash(&samples).to_hex().to_string()
        );
    }

    #[test]
    fn test_extract_pcm_data_rejects_garbage() {
        assert_eq!(extract_pcm_data(b"not a wav file"), None);
        let mut wav = encode(&[1, 2, 3], &format_1s_8k()).unwrap();
        wav[0] = b'X';
        assert_eq!(extract_pcm_data(&wav), None);
    }

    #[test]
    fn test_extract_pcm_data_truncated_data_chunk() {
        let mut wav = encode(&vec![9u8; 50], &format_1s_8k()).unwrap();
        wav.truncate(60); // data chunk claims 50 bytes but only 16 remain
        assert_eq!(extract_pcm_data(&wav), None);
    }
}
