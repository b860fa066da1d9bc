//! Render-all command implementation
//!
//! Renders every formula variant at its default format into one directory.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use bytebeat_synth::{render_default, Formula};

use super::render::write_wav_file;

/// One rendered file in the machine-readable output.
#[derive(Debug, Serialize)]
pub struct RenderedFile {
    /// Formula name.
    pub formula: String,
    /// Path the WAV file was written to.
    pub output: String,
    /// Size of the WAV file in bytes.
    pub wav_bytes: usize,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// Machine-readable output for the render-all command.
#[derive(Debug, Serialize)]
pub struct RenderAllOutput {
    /// Always "ok"; per-file failures abort the run.
    pub status: String,
    /// Rendered files, in presentation order.
    pub files: Vec<RenderedFile>,
    /// Wall-clock time spent, in milliseconds.
    pub duration_ms: u64,
}

/// Run the render-all command
///
/// # Arguments
/// * `out_dir` - Output directory (default: current directory)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
pub fn run(out_dir: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let out_dir = Path::new(out_dir.unwrap_or("."));

    if !json_output {
        println!(
            "{} {}",
            "Rendering all formulas to:".cyan().bold(),
            out_dir.display()
        );
    }

    let mut files = Vec::with_capacity(Formula::ALL.len());
    for formula in Formula::ALL {
        // Default formats are always valid; render cannot fail here.
        let result = render_default(formula)?;
        let out_path = out_dir.join(format!("{}.wav", formula));
        write_wav_file(&out_path, &result.wav.wav_data)?;

        if !json_output {
            println!(
                "  {} {} ({} bytes, {:.0} s)",
                "+".green(),
                out_path.display(),
                result.wav.wav_data.len(),
                result.wav.duration_seconds()
            );
        }

        files.push(RenderedFile {
            formula: formula.name().to_string(),
            output: out_path.display().to_string(),
            wav_bytes: result.wav.wav_data.len(),
            pcm_hash: result.wav.pcm_hash,
        });
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    if json_output {
        let out = RenderAllOutput {
            status: "ok".to_string(),
            files,
            duration_ms,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} {} files in {} ms",
            "Done:".green().bold(),
            files.len(),
            duration_ms
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_writes_five_files() {
        let dir = tempfile::tempdir().unwrap();

        run(Some(dir.path().to_str().unwrap()), true).unwrap();

        for name in ["sine", "glitch", "bold", "tunnel", "icons"] {
            let path = dir.path().join(format!("{}.wav", name));
            assert!(path.exists(), "missing {}", name);
            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(&bytes[0..4], b"RIFF");
        }
    }

    #[test]
    fn test_render_all_default_sizes() {
        let dir = tempfile::tempdir().unwrap();

        run(Some(dir.path().to_str().unwrap()), true).unwrap();

        let tunnel = std::fs::read(dir.path().join("tunnel.wav")).unwrap();
        assert_eq!(tunnel.len(), 44 + 8000 * 14);
        let icons = std::fs::read(dir.path().join("icons.wav")).unwrap();
        assert_eq!(icons.len(), 44 + 16000 * 4);
    }
}
