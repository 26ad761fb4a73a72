//! Conquest CLI - play, inspect scenarios and estimate attack odds.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Conquest - a dice-driven territory conquest game
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game
    Play {
        /// Scenario file (.json) to skip territory registration
        #[arg(long)]
        scenario: Option<std::path::PathBuf>,

        /// Dice seed (default: from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Require at least 5 territories
        #[arg(long)]
        strict: bool,

        /// Fixed mission kind (1-5, default: random)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mission: Option<u8>,
    },

    /// Show a scenario's map and which missions it already satisfies
    Check {
        /// Scenario file (.json)
        #[arg(required = true)]
        scenario: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Estimate how often repeated attacks conquer a territory
    Odds {
        /// Troops in the attacking territory
        #[arg(short, long)]
        attacker: u32,

        /// Troops in the defending territory
        #[arg(short, long)]
        defender: u32,

        /// Number of trials (default: 10000)
        #[arg(short, long, default_value = "10000")]
        trials: u64,

        /// Starting seed (increments for each trial)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let result = match args.command {
        Commands::Play {
            scenario,
            seed,
            strict,
            mission,
        } => cli::play::execute(scenario, seed, strict, mission),

        Commands::Check { scenario, format } => cli::check::execute(scenario, format),

        Commands::Odds {
            attacker,
            defender,
            trials,
            seed,
            threads,
            progress,
            format,
        } => cli::odds::execute(attacker, defender, trials, seed, threads, progress, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
