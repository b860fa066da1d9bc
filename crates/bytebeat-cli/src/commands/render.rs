//! Render command implementation
//!
//! Renders a single formula variant to a WAV file, with optional overrides
//! for the variant's default sample rate and duration.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use bytebeat_synth::{render, Formula};

/// Machine-readable output for the render command.
#[derive(Debug, Serialize)]
pub struct RenderOutput {
    /// "ok" or "error".
    pub status: String,
    /// Formula name.
    pub formula: String,
    /// Sample rate in Hz.
    pub sample_rate: i32,
    /// Duration in seconds.
    pub duration_seconds: i32,
    /// Number of PCM samples rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<usize>,
    /// Size of the WAV file in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav_bytes: Option<usize>,
    /// BLAKE3 hash of the PCM data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Path the WAV file was written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Wall-clock time spent, in milliseconds.
    pub duration_ms: u64,
    /// Error message when status is "error".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the render command
///
/// # Arguments
/// * `formula_name` - Formula to render (sine, glitch, bold, tunnel, icons)
/// * `output` - Output WAV path (default: `<formula>.wav`)
/// * `sample_rate` - Optional sample rate override in Hz
/// * `duration` - Optional duration override in seconds
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 invalid format
pub fn run(
    formula_name: &str,
    output: Option<&str>,
    sample_rate: Option<i32>,
    duration: Option<i32>,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    let formula: Formula = formula_name.parse().map_err(anyhow::Error::msg)?;

    let mut format = formula.default_format();
    if let Some(rate) = sample_rate {
        format.sample_rate = rate;
    }
    if let Some(seconds) = duration {
        format.duration_seconds = seconds;
    }

    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}.wav", formula)));

    if !json_output {
        println!("{} {}", "Rendering:".cyan().bold(), formula);
        println!(
            "{} {} Hz, {} s, 8-bit mono",
            "Format:".dimmed(),
            format.sample_rate,
            format.duration_seconds
        );
    }

    let result = match render(formula, &format) {
        Ok(result) => result,
        Err(err) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            if json_output {
                let out = RenderOutput {
                    status: "error".to_string(),
                    formula: formula.name().to_string(),
                    sample_rate: format.sample_rate,
                    duration_seconds: format.duration_seconds,
                    num_samples: None,
                    wav_bytes: None,
                    pcm_hash: None,
                    output: None,
                    duration_ms,
                    error: Some(err.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!("{} {}", "Invalid format:".red().bold(), err);
            }
            return Ok(ExitCode::from(1));
        }
    };

    write_wav_file(&out_path, &result.wav.wav_data)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let out = RenderOutput {
            status: "ok".to_string(),
            formula: formula.name().to_string(),
            sample_rate: format.sample_rate,
            duration_seconds: format.duration_seconds,
            num_samples: Some(result.wav.num_samples),
            wav_bytes: Some(result.wav.wav_data.len()),
            pcm_hash: Some(result.wav.pcm_hash.clone()),
            output: Some(out_path.display().to_string()),
            duration_ms,
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} {} ({} bytes, pcm {}) in {} ms",
            "Wrote".green().bold(),
            out_path.display(),
            result.wav.wav_data.len(),
            &result.wav.pcm_hash[..16],
            duration_ms
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes the WAV bytes to disk with path context on failure.
pub(crate) fn write_wav_file(path: &Path, wav_data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    std::fs::write(path, wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))
}
