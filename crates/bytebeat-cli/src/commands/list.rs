//! List command implementation
//!
//! Prints the formula inventory with per-variant defaults and the
//! documented expression for each.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use bytebeat_synth::Formula;

/// One formula entry in the machine-readable output.
#[derive(Debug, Serialize)]
pub struct FormulaEntry {
    /// Stable formula name.
    pub name: String,
    /// Default sample rate in Hz.
    pub sample_rate: i32,
    /// Default duration in seconds.
    pub duration_seconds: i32,
    /// The expression the variant evaluates.
    pub expression: String,
}

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON diagnostics
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries: Vec<FormulaEntry> = Formula::ALL
        .iter()
        .map(|formula| {
            let format = formula.default_format();
            FormulaEntry {
                name: formula.name().to_string(),
                sample_rate: format.sample_rate,
                duration_seconds: format.duration_seconds,
                expression: formula.expression().to_string(),
            }
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available formulas:".cyan().bold());
    for entry in &entries {
        println!(
            "  {:<8} {} Hz, {} s",
            entry.name.bold(),
            entry.sample_rate,
            entry.duration_seconds
        );
        println!("           {}", entry.expression.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_covers_all_formulas() {
        // Both output modes walk the same entries; exercise them both.
        run(false).unwrap();
        run(true).unwrap();
        assert_eq!(Formula::ALL.len(), 5);
    }
}
