//! Game layer for Conquest.
//!
//! Implements the rules on top of a plain territory list:
//! - Territories with bounded name and faction labels
//! - Map with 1-based lookup and per-faction aggregates
//! - Dice-based combat with conquest and troop transfer
//! - Missions checked after every round
//! - Sessions tying a map, a player and a mission together

mod combat;
mod dice;
mod invariants;
mod map;
mod mission;
mod session;
mod territory;

pub use combat::{
    conquest_transfer, process_attack, resolve_attack, AttackOutcome, RoundWinner, TroopChange,
};
pub use dice::{time_seed, Dice, GameRng, ScriptedDice, D6};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use map::{Map, TerritoryRow};
pub use mission::{Mission, BLUE, BLUE_TARGET, GREEN, HOLD_TARGET, TROOP_TARGET};
pub use session::{
    GameConfig, GameStatus, Session, TurnReport, DEFAULT_MIN_TERRITORIES, MAX_TERRITORIES,
    STRICT_MIN_TERRITORIES,
};
pub use territory::{bounded_label, truncate_chars, Territory, NAME_MAX_CHARS, OWNER_MAX_CHARS};
