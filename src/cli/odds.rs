//! Odds command implementation.

use super::output::{format_odds_text, JsonOdds};
use super::{CliError, OutputFormat};
use conquest::game::time_seed;
use conquest::odds::estimate_odds;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Execute the odds command.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized.
pub(crate) fn execute(
    attacker: u32,
    defender: u32,
    trials: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    progress: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let seed = seed.unwrap_or_else(time_seed);

    let pb = if progress {
        let pb = ProgressBar::new(trials);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let report = estimate_odds(attacker, defender, trials, seed);

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(report.trials);
        pb.finish_with_message("done");
    }
    log::info!("{} trials in {:.2}s", report.trials, start.elapsed().as_secs_f64());

    match format {
        OutputFormat::Text => {
            print!("{}", format_odds_text(attacker, defender, &report));
            println!("  Seed: {seed}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOdds::new(attacker, defender, seed, report))
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
