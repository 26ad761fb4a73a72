//! Error types for the conquest core.

use std::fmt;

/// Failures reported by map construction and attack resolution.
///
/// Everything except [`GameError::Allocation`] is recoverable: the map is left
/// untouched and the caller simply asks the player again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested map is smaller than the configured minimum.
    MapTooSmall {
        /// Requested number of territories.
        size: usize,
        /// Minimum accepted number of territories.
        min: usize,
    },
    /// Requested map is larger than the configured maximum.
    MapTooLarge {
        /// Requested number of territories.
        size: usize,
        /// Maximum accepted number of territories.
        max: usize,
    },
    /// Storage for the map could not be reserved.
    Allocation {
        /// Requested number of territories.
        size: usize,
    },
    /// A 1-based position outside `[1, size]`.
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// Number of territories on the map.
        size: usize,
    },
    /// Attacker and defender are the same territory.
    SelfAttack {
        /// The position given for both sides.
        position: usize,
    },
    /// Attacker and defender belong to the same faction.
    SameFaction,
    /// The attacker must keep one troop home, so it needs at least two.
    InsufficientTroops {
        /// Troops garrisoned in the attacking territory.
        troops: u32,
    },
}

impl GameError {
    /// Whether the session can keep going after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Allocation { .. })
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MapTooSmall { size, min } => {
                write!(f, "a map needs at least {min} territories, got {size}")
            }
            GameError::MapTooLarge { size, max } => {
                write!(f, "a map holds at most {max} territories, got {size}")
            }
            GameError::Allocation { size } => {
                write!(f, "failed to allocate memory for {size} territories")
            }
            GameError::OutOfRange { position, size } => {
                write!(f, "invalid territory {position}: choose between 1 and {size}")
            }
            GameError::SelfAttack { position } => {
                write!(f, "territory {position} cannot attack itself")
            }
            GameError::SameFaction => {
                write!(f, "cannot attack a territory of your own faction")
            }
            GameError::InsufficientTroops { troops } => {
                write!(f, "not enough troops to attack ({troops}, need at least 2)")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for core game operations.
pub type GameResult<T> = Result<T, GameError>;
