//! Dice config loading from files and command-line overrides.

use std::fs;

use anyhow::{Context, Result};
use clap::Args;
use tonedice_core::{DiceConfig, DiceConfiguration};

/// Options shared by every command that needs a dice configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON dice config
    #[arg(short, long)]
    pub config: Option<String>,

    /// Tonic pitch name (e.g. C, F#, Bb)
    #[arg(long)]
    pub tonic: Option<String>,

    /// Scale or mode name (e.g. major, dorian, chromatic)
    #[arg(long)]
    pub scale: Option<String>,

    /// Spell accidentals with sharps instead of flats
    #[arg(long)]
    pub sharps: bool,
}

/// Reads the config file (if any) and applies command-line overrides.
pub fn load_config_params(args: &ConfigArgs) -> Result<DiceConfig> {
    let mut params = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            DiceConfig::from_json(&content)
                .with_context(|| format!("Failed to parse {}", path))?
        }
        None => DiceConfig::default(),
    };

    if let Some(tonic) = &args.tonic {
        params.tonic = tonic.clone();
    }
    if let Some(scale) = &args.scale {
        params.scale_name = scale.clone();
    }
    if args.sharps {
        params.use_flats = false;
    }
    Ok(params)
}

/// Loads and validates the dice configuration.
pub fn load_config(args: &ConfigArgs) -> Result<DiceConfiguration> {
    let params = load_config_params(args)?;
    params.build().context("Invalid dice config")
}
