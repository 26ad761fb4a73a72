//! Check command implementation.

use super::output::{format_missions_text, JsonCheck};
use super::{CliError, OutputFormat};
use conquest::render::render_table;
use conquest::scenario::Scenario;
use conquest::GameConfig;
use conquest::game::bounded_label;
use std::path::PathBuf;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded.
pub(crate) fn execute(scenario: PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let scenario = Scenario::load(&scenario)?;
    let map = scenario.build_map(&GameConfig::default())?;
    let assigned = scenario.mission()?;
    let player = bounded_label(&scenario.player);

    match format {
        OutputFormat::Text => {
            print!("{}", render_table(&map));
            println!();
            print!("{}", format_missions_text(&map, &player, assigned));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonCheck::new(&map, &player, assigned))
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
