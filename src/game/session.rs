//! Game session: one map, one player, one mission.

use serde::Serialize;

use crate::error::{GameError, GameResult};
use crate::game::{
    assert_invariants, bounded_label, process_attack, AttackOutcome, Dice, GameRng, Map,
    Mission,
};

/// Minimum map size accepted by default.
pub const DEFAULT_MIN_TERRITORIES: usize = 2;

/// Minimum map size in strict games.
pub const STRICT_MIN_TERRITORIES: usize = 5;

/// Largest map registration will build.
pub const MAX_TERRITORIES: usize = 10_000;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest map a game may be played on.
    pub min_territories: usize,
    /// Largest map a game may be played on.
    pub max_territories: usize,
    /// Dice seed (default: seeded from the clock).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_territories: DEFAULT_MIN_TERRITORIES,
            max_territories: MAX_TERRITORIES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Configuration requiring at least [`STRICT_MIN_TERRITORIES`] territories.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_territories: STRICT_MIN_TERRITORIES,
            ..Self::default()
        }
    }

    /// Check a map size against both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MapTooSmall`] or [`GameError::MapTooLarge`].
    pub const fn check_size(&self, size: usize) -> GameResult<()> {
        if size < self.min_territories {
            Err(GameError::MapTooSmall {
                size,
                min: self.min_territories,
            })
        } else if size > self.max_territories {
            Err(GameError::MapTooLarge {
                size,
                max: self.max_territories,
            })
        } else {
            Ok(())
        }
    }

    /// Blank map of `size` territories within the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns the bound violated, or [`GameError::Allocation`].
    pub fn new_map(&self, size: usize) -> GameResult<Map> {
        self.check_size(size)?;
        Map::new(size, self.min_territories)
    }

    /// Dice for this configuration.
    #[must_use]
    pub fn dice(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_time, GameRng::new)
    }
}

/// Where the game stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Keep playing.
    Ongoing,
    /// The player's mission is fulfilled.
    MissionComplete,
    /// A single faction owns the whole map.
    Domination,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Dice and troop changes of the round.
    pub outcome: AttackOutcome,
    /// Game status right after the round.
    pub status: GameStatus,
}

/// A running game.
#[derive(Debug, Clone)]
pub struct Session<D: Dice = GameRng> {
    map: Map,
    player: String,
    mission: Mission,
    dice: D,
    turn: u32,
}

impl<D: Dice> Session<D> {
    /// Start a session with a known mission.
    ///
    /// The player's faction is truncated like any owner label.
    #[must_use]
    pub fn new(map: Map, player: &str, mission: Mission, dice: D) -> Self {
        let player = bounded_label(player);
        log::info!("session started for {player}: {mission}");
        Self {
            map,
            player,
            mission,
            dice,
            turn: 0,
        }
    }

    /// Start a session with a mission drawn from the session's own dice.
    #[must_use]
    pub fn with_random_mission(map: Map, player: &str, mut dice: D) -> Self {
        let mission = Mission::assign(&mut dice);
        Self::new(map, player, mission, dice)
    }

    /// The territory map.
    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// The player's faction label.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The player's mission.
    #[must_use]
    pub const fn mission(&self) -> Mission {
        self.mission
    }

    /// Number of rounds resolved so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Evaluate the player's mission against the current map.
    #[must_use]
    pub fn check_mission(&self) -> bool {
        self.mission.evaluate(&self.map, &self.player)
    }

    /// Current game status. A fulfilled mission wins over domination.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.check_mission() {
            GameStatus::MissionComplete
        } else if self.map.sole_owner().is_some() {
            GameStatus::Domination
        } else {
            GameStatus::Ongoing
        }
    }

    /// Resolve one round between two 1-based positions.
    ///
    /// # Errors
    ///
    /// Returns the guard failure from [`process_attack`]; the map and turn
    /// counter are unchanged in that case.
    pub fn attack(&mut self, attacker_pos: usize, defender_pos: usize) -> GameResult<TurnReport> {
        let outcome = process_attack(&mut self.map, attacker_pos, defender_pos, &mut self.dice)
            .inspect_err(|e| log::warn!("attack {attacker_pos} -> {defender_pos} rejected: {e}"))?;

        self.turn += 1;
        // A defender registered empty may hold with zero troops
        if outcome.defender.delta() == 0 {
            assert_invariants(&self.map, &[attacker_pos]);
        } else {
            assert_invariants(&self.map, &[attacker_pos, defender_pos]);
        }

        let status = self.status();
        if status.is_over() {
            log::info!("game over after {} rounds: {status:?}", self.turn);
        }
        Ok(TurnReport { outcome, status })
    }

    /// End the session, handing back the map.
    #[must_use]
    pub fn into_map(self) -> Map {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RoundWinner, ScriptedDice, Territory};

    fn sample_map() -> Map {
        Map::from_territories(
            vec![
                Territory::new("Brasil", "Red", 6),
                Territory::new("Argentina", "Blue", 1),
                Territory::new("Chile", "Green", 1),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_territories, 2);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_territories, MAX_TERRITORIES);
        assert_eq!(GameConfig::strict().min_territories, 5);
        assert_eq!(GameConfig::strict().max_territories, MAX_TERRITORIES);
    }

    #[test]
    fn test_new_map_bounds() {
        let config = GameConfig {
            max_territories: 8,
            ..GameConfig::default()
        };
        assert_eq!(config.new_map(8).unwrap().len(), 8);
        assert_eq!(
            config.new_map(9),
            Err(GameError::MapTooLarge { size: 9, max: 8 })
        );
        assert_eq!(
            config.new_map(1),
            Err(GameError::MapTooSmall { size: 1, min: 2 })
        );
        assert_eq!(
            GameConfig::default().new_map(100_000_000),
            Err(GameError::MapTooLarge {
                size: 100_000_000,
                max: MAX_TERRITORIES,
            })
        );
    }

    #[test]
    fn test_config_seeded_dice() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        assert_eq!(config.dice().seed(), 11);
    }

    #[test]
    fn test_random_mission_drawn_from_dice() {
        let session = Session::with_random_mission(sample_map(), "Red", ScriptedDice::new([4]));
        assert_eq!(session.mission(), Mission::MassTroops);
    }

    #[test]
    fn test_player_label_truncated() {
        let session = Session::new(
            sample_map(),
            "Blueberries",
            Mission::ConquerAll,
            ScriptedDice::new([1]),
        );
        assert_eq!(session.player(), "Blueberri");
    }

    #[test]
    fn test_attack_advances_turn_and_reports_status() {
        let mut session = Session::new(
            sample_map(),
            "Red",
            Mission::HoldTerritories,
            ScriptedDice::new([6, 1]),
        );

        let report = session.attack(1, 2).unwrap();
        assert!(report.outcome.conquered);
        assert_eq!(report.status, GameStatus::Ongoing);
        assert_eq!(session.turn(), 1);

        let report = session.attack(1, 3).unwrap();
        assert_eq!(report.outcome.winner, RoundWinner::Attacker);
        assert_eq!(report.status, GameStatus::MissionComplete);
        assert!(session.check_mission());
    }

    #[test]
    fn test_rejected_attack_does_not_count() {
        let mut session = Session::new(
            sample_map(),
            "Red",
            Mission::ConquerAll,
            ScriptedDice::new([6, 1]),
        );
        assert_eq!(session.attack(2, 2), Err(GameError::SelfAttack { position: 2 }));
        assert_eq!(
            session.attack(3, 2),
            Err(GameError::InsufficientTroops { troops: 1 })
        );
        assert_eq!(session.turn(), 0);
        assert_eq!(session.map(), &sample_map());
    }

    #[test]
    fn test_empty_defender_may_hold() {
        let map = Map::from_territories(
            vec![Territory::new("Brasil", "Red", 4), Territory::new("Chile", "Blue", 0)],
            2,
        )
        .unwrap();
        let mut session = Session::new(map, "Red", Mission::ConquerAll, ScriptedDice::new([2, 2]));

        let report = session.attack(1, 2).unwrap();
        assert_eq!(report.outcome.winner, RoundWinner::Defender);
        assert_eq!(session.map().get(2).unwrap().troops(), 0);
        assert_eq!(report.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_domination_ends_game_without_mission() {
        // Blue player cannot fulfil "control Blue" once Red owns everything.
        let map = Map::from_territories(
            vec![Territory::new("Brasil", "Red", 8), Territory::new("Chile", "Blue", 1)],
            2,
        )
        .unwrap();
        let mut session = Session::new(map, "Blue", Mission::ControlBlue, ScriptedDice::new([5, 2]));

        let report = session.attack(1, 2).unwrap();
        assert_eq!(report.status, GameStatus::Domination);
        assert_eq!(session.map().sole_owner(), Some("Red"));
        assert!(report.status.is_over());
    }
}
