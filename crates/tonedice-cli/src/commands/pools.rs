//! Pools command implementation
//!
//! Prints the note and interval pools derived from the configuration.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

use crate::input::{load_config, ConfigArgs};

/// Derived pools of a configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoolsOutput {
    pub tonic: String,
    pub scale: String,
    pub notes: Vec<String>,
    pub intervals: Vec<i64>,
    pub durations: Vec<String>,
    pub octaves: Vec<i64>,
}

/// Run the pools command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(config_args: &ConfigArgs, json_output: bool) -> Result<ExitCode> {
    let output = pools(config_args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} {}", "Scale:".cyan().bold(), output.tonic, output.scale);
    println!("{} {}", "Notes:".dimmed(), output.notes.join(" "));
    println!("{} {}", "Intervals:".dimmed(), join(&output.intervals));
    println!("{} {}", "Durations:".dimmed(), output.durations.join(" "));
    println!("{} {}", "Octaves:".dimmed(), join(&output.octaves));
    Ok(ExitCode::SUCCESS)
}

/// Derives the pools, surfacing the first derivation error.
pub fn pools(config_args: &ConfigArgs) -> Result<PoolsOutput> {
    let config = load_config(config_args)?;
    let notes = config.notes().context("Failed to derive notes")?.to_vec();
    let intervals = config
        .intervals()
        .context("Failed to derive intervals")?
        .to_vec();
    Ok(PoolsOutput {
        tonic: config.tonic().to_string(),
        scale: config.scale_name().to_string(),
        notes,
        intervals,
        durations: config.durations().to_vec(),
        octaves: config.octave_range().to_vec(),
    })
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
