//! bytebeat CLI - render procedural bytebeat formulas to WAV files
//!
//! This binary provides commands for rendering the five built-in formula
//! variants (individually or all at once) and listing the inventory.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use bytebeat_cli::commands;

/// bytebeat - deterministic bytebeat synthesis to WAV
#[derive(Parser)]
#[command(name = "bytebeat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one formula variant to a WAV file
    Render {
        /// Formula to render
        #[arg(value_parser = ["sine", "glitch", "bold", "tunnel", "icons"])]
        formula: String,

        /// Output WAV path (default: <formula>.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Override the variant's default sample rate in Hz
        #[arg(long)]
        sample_rate: Option<i32>,

        /// Override the variant's default duration in seconds
        #[arg(long)]
        duration: Option<i32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render all five formula variants at their default formats
    RenderAll {
        /// Output directory (default: current directory)
        #[arg(long)]
        out_dir: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List available formulas with their defaults and expressions
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            formula,
            output,
            sample_rate,
            duration,
            json,
        } => commands::render::run(&formula, output.as_deref(), sample_rate, duration, json),
        Commands::RenderAll { out_dir, json } => {
            commands::render_all::run(out_dir.as_deref(), json)
        }
        Commands::List { json } => commands::list::run(json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_with_options() {
        let cli = Cli::try_parse_from([
            "bytebeat",
            "render",
            "glitch",
            "--output",
            "out.wav",
            "--sample-rate",
            "12000",
            "--duration",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                formula,
                output,
                sample_rate,
                duration,
                json,
            } => {
                assert_eq!(formula, "glitch");
                assert_eq!(output.as_deref(), Some("out.wav"));
                assert_eq!(sample_rate, Some(12000));
                assert_eq!(duration, Some(5));
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_formula() {
        assert!(Cli::try_parse_from(["bytebeat", "render", "chiptune"]).is_err());
    }

    #[test]
    fn test_cli_parses_render_all_defaults() {
        let cli = Cli::try_parse_from(["bytebeat", "render-all"]).unwrap();
        match cli.command {
            Commands::RenderAll { out_dir, json } => {
                assert!(out_dir.is_none());
                assert!(!json);
            }
            _ => panic!("expected render-all command"),
        }
    }

    #[test]
    fn test_cli_parses_list_json() {
        let cli = Cli::try_parse_from(["bytebeat", "list", "--json"]).unwrap();
        match cli.command {
            Commands::List { json } => assert!(json),
            _ => panic!("expected list command"),
        }
    }
}
