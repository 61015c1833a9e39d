//! Categories command implementation
//!
//! Lists every roll category the configuration supports.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tonedice_core::DiceFactory;

use crate::input::{load_config, ConfigArgs};

/// Run the categories command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(config_args: &ConfigArgs, json_output: bool) -> Result<ExitCode> {
    let names = category_names(config_args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        println!("{} {}", "Categories:".cyan().bold(), names.len());
        for name in &names {
            println!("  {}", name);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Names of the standard categories plus the per-triad and per-mode ones.
pub fn category_names(config_args: &ConfigArgs) -> Result<Vec<String>> {
    let config = load_config(config_args)?;
    Ok(DiceFactory::new(&config)
        .categories()
        .iter()
        .map(|c| c.name())
        .collect())
}
