//! Roll command implementation
//!
//! Rolls one category of dice a number of times and prints the results.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use tonedice_core::rng::rng_for;
use tonedice_core::{DiceFactory, Roll, RollCategory};

use crate::input::{load_config, ConfigArgs};

/// Machine-readable result of a roll command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RollOutput {
    /// Category name as given on the command line.
    pub category: String,
    /// Seed the rolls were drawn with.
    pub seed: u32,
    pub rolls: Vec<Roll>,
}

/// Run the roll command
///
/// # Arguments
/// * `category` - Roll category name (e.g. `note`, `chord_quality_major`)
/// * `count` - Number of rolls
/// * `seed` - Base seed; a random one is chosen and reported if absent
/// * `config_args` - Config file and overrides
/// * `json_output` - Whether to print JSON instead of colored text
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    category: &str,
    count: usize,
    seed: Option<u32>,
    config_args: &ConfigArgs,
    json_output: bool,
) -> Result<ExitCode> {
    let output = roll(category, count, seed, config_args)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Rolling:".cyan().bold(), output.category);
    println!("{} {}", "Seed:".dimmed(), output.seed);
    for (i, roll) in output.rolls.iter().enumerate() {
        println!("  {:>3}  {}", (i + 1).to_string().dimmed(), roll.to_string().green());
    }
    Ok(ExitCode::SUCCESS)
}

/// Rolls `count` dice of `category` with a generator derived from `seed`.
pub fn roll(
    category: &str,
    count: usize,
    seed: Option<u32>,
    config_args: &ConfigArgs,
) -> Result<RollOutput> {
    let category: RollCategory = category.parse()?;
    let config = load_config(config_args)?;
    let factory = DiceFactory::new(&config);

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = rng_for(seed, &category.name());
    let rolls = factory
        .dice(&category)
        .roll_many(count, &mut rng)
        .with_context(|| format!("Failed to roll {}", category))?;

    Ok(RollOutput {
        category: category.name(),
        seed,
        rolls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_seed_same_output() {
        let args = ConfigArgs::default();
        let a = roll("rhythmic_phrase", 5, Some(9), &args).unwrap();
        let b = roll("rhythmic_phrase", 5, Some(9), &args).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rolls.len(), 5);
        assert_eq!(a.category, "rhythmic_phrase");
    }

    #[test]
    fn test_scale_override_reaches_rolls() {
        let args = ConfigArgs {
            tonic: Some("D".to_string()),
            scale: Some("major".to_string()),
            sharps: true,
            ..Default::default()
        };
        let output = roll("note", 200, Some(3), &args).unwrap();
        let allowed = ["D", "E", "F#", "G", "A", "B", "C#"];
        for roll in &output.rolls {
            assert!(allowed.contains(&roll.as_text().unwrap()), "{}", roll);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = roll("kazoo", 1, Some(1), &ConfigArgs::default()).unwrap_err();
        assert!(err.to_string().contains("kazoo"));
    }

    #[test]
    fn test_roll_failure_has_context() {
        let args = ConfigArgs {
            scale: Some("nonsense".to_string()),
            ..Default::default()
        };
        let err = roll("note", 1, Some(1), &args).unwrap_err();
        assert_eq!(err.to_string(), "Failed to roll note");
    }

    #[test]
    fn test_output_json_shape() {
        let output = RollOutput {
            category: "octave".to_string(),
            seed: 4,
            rolls: vec![Roll::Number(3), Roll::Number(5)],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "octave", "seed": 4, "rolls": [3, 5]})
        );
    }
}
