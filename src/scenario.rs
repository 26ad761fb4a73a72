//! Scenario files: a pre-registered map, player and optional mission.
//!
//! ```json
//! {
//!   "player": "Red",
//!   "mission": 2,
//!   "territories": [
//!     { "name": "Brasil", "owner": "Red", "troops": 5 },
//!     { "name": "Argentina", "owner": "Blue", "troops": 3 }
//!   ]
//! }
//! ```
//!
//! `mission` may be omitted, in which case one is drawn from the dice.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{Dice, GameConfig, Map, Mission, Session, Territory};

/// One territory as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorySpec {
    /// Territory name.
    pub name: String,
    /// Controlling faction.
    pub owner: String,
    /// Garrisoned troops.
    pub troops: u32,
}

/// A complete game setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// The player's faction.
    pub player: String,
    /// Fixed mission kind (1-5); drawn at random when absent.
    #[serde(default)]
    pub mission: Option<u8>,
    /// Territories in map order.
    pub territories: Vec<TerritorySpec>,
}

/// Errors while loading a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// Reading the file failed.
    Io(io::Error),
    /// The file is not a valid scenario.
    Parse(serde_json::Error),
    /// The scenario describes an unplayable map.
    Game(GameError),
    /// Mission kind outside 1-5.
    UnknownMission(u8),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read scenario: {e}"),
            Self::Parse(e) => write!(f, "Invalid scenario: {e}"),
            Self::Game(e) => write!(f, "Unplayable scenario: {e}"),
            Self::UnknownMission(kind) => write!(f, "Unknown mission {kind} (expected 1-5)"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Game(e) => Some(e),
            Self::UnknownMission(_) => None,
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<GameError> for ScenarioError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] or [`ScenarioError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        log::debug!("loaded scenario from {}", path.display());
        Self::from_json(&json)
    }

    /// The fixed mission, if the scenario names one.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownMission`] for a kind outside 1-5.
    pub fn mission(&self) -> Result<Option<Mission>, ScenarioError> {
        self.mission
            .map(|kind| Mission::from_kind(kind).ok_or(ScenarioError::UnknownMission(kind)))
            .transpose()
    }

    /// Build the map, truncating labels the way registration does.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Game`] if the map is outside the configured bounds.
    pub fn build_map(&self, config: &GameConfig) -> Result<Map, ScenarioError> {
        config.check_size(self.territories.len())?;
        let territories = self
            .territories
            .iter()
            .map(|spec| Territory::new(&spec.name, &spec.owner, spec.troops))
            .collect();
        Ok(Map::from_territories(territories, config.min_territories)?)
    }

    /// Start a session from this scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if the mission or the map is invalid.
    pub fn into_session<D: Dice>(
        &self,
        config: &GameConfig,
        dice: D,
    ) -> Result<Session<D>, ScenarioError> {
        let map = self.build_map(config)?;
        Ok(match self.mission()? {
            Some(mission) => Session::new(map, &self.player, mission, dice),
            None => Session::with_random_mission(map, &self.player, dice),
        })
    }
}
