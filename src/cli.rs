//! CLI command implementations for Conquest.

pub(crate) mod check;
pub(crate) mod odds;
pub(crate) mod play;

mod output;
mod prompt;

use clap::ValueEnum;
use conquest::GameError;
use conquest::scenario::ScenarioError;
use std::error::Error;
use std::fmt;

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
    fatal: bool,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fatal: false,
        }
    }

    /// Process exit status for this error. Allocation failures get their own.
    pub(crate) const fn exit_code(&self) -> u8 {
        if self.fatal { 2 } else { 1 }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self {
            message: e.to_string(),
            fatal: !e.is_recoverable(),
        }
    }
}

impl From<ScenarioError> for CliError {
    fn from(e: ScenarioError) -> Self {
        match e {
            ScenarioError::Game(game) => game.into(),
            other => Self::new(other.to_string()),
        }
    }
}
