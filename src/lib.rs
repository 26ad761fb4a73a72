// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Conquest: a dice-driven territory conquest game.
//!
//! A fixed list of territories, each held by a faction and garrisoned with
//! troops. Any territory may attack any other; a round is one d6 against
//! another, ties favoring the defender. The player wins by completing a
//! secret mission drawn at the start of the session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (setup, menus, narration)     │
//! ├─────────────────────────────────────┤
//! │   Session: map + player + mission   │
//! ├──────────────────┬──────────────────┤
//! │  Battle resolver │  Mission engine  │
//! ├──────────────────┴──────────────────┤
//! │   Territory map         Dice        │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod odds;
pub mod render;
pub mod scenario;

pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    process_attack, resolve_attack, AttackOutcome, Dice, GameConfig, GameRng, GameStatus, Map,
    Mission, ScriptedDice, Session, Territory, TurnReport,
};
