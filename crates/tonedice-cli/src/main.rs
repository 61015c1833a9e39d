//! Tonedice CLI - Roll weighted musical dice from the command line
//!
//! This binary rolls notes, intervals, chords, modes, and rhythmic phrases
//! from a dice configuration and prints the derived pools.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tonedice_cli::commands;
use tonedice_cli::input::ConfigArgs;

/// Tonedice - Weighted Musical Dice
#[derive(Parser)]
#[command(name = "tonedice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice of one category
    Roll {
        /// Roll category (e.g. note, chord_triad, chord_quality_major, dorian_degree)
        category: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Base seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the roll categories of a configuration
    Categories {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the note, interval, duration, and octave pools
    Pools {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            category,
            count,
            seed,
            config,
            json,
        } => commands::roll::run(&category, count, seed, &config, json),
        Commands::Categories { config, json } => commands::categories::run(&config, json),
        Commands::Pools { config, json } => commands::pools::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
