//! Secret missions and their victory predicates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Dice, Map};

/// Faction the elimination mission targets.
pub const GREEN: &str = "Green";

/// Faction named by the Blue-control mission.
pub const BLUE: &str = "Blue";

/// Territories needed for [`Mission::HoldTerritories`].
pub const HOLD_TARGET: usize = 3;

/// Combined garrison needed for [`Mission::MassTroops`].
pub const TROOP_TARGET: u64 = 20;

/// Blue territories needed for [`Mission::ControlBlue`].
pub const BLUE_TARGET: usize = 2;

/// One of the five victory conditions, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mission {
    /// No territory may remain under [`GREEN`].
    EliminateGreen,
    /// Hold at least [`HOLD_TARGET`] territories.
    HoldTerritories,
    /// Hold every territory on the map.
    ConquerAll,
    /// Hold territories with at least [`TROOP_TARGET`] troops in total.
    MassTroops,
    /// Control at least [`BLUE_TARGET`] territories under [`BLUE`].
    ///
    /// Only the Blue faction can ever complete this one: a player of any
    /// other color is never credited for Blue territories.
    ControlBlue,
}

impl Mission {
    /// All missions, ordered by kind.
    pub const ALL: [Mission; 5] = [
        Mission::EliminateGreen,
        Mission::HoldTerritories,
        Mission::ConquerAll,
        Mission::MassTroops,
        Mission::ControlBlue,
    ];

    /// Look a mission up by its kind number (1-5).
    #[must_use]
    pub fn from_kind(kind: u8) -> Option<Self> {
        kind.checked_sub(1)
            .and_then(|idx| Self::ALL.get(usize::from(idx)))
            .copied()
    }

    /// Kind number (1-5).
    #[must_use]
    pub const fn kind(self) -> u8 {
        match self {
            Mission::EliminateGreen => 1,
            Mission::HoldTerritories => 2,
            Mission::ConquerAll => 3,
            Mission::MassTroops => 4,
            Mission::ControlBlue => 5,
        }
    }

    /// Draw a mission uniformly at random.
    pub fn assign<D: Dice + ?Sized>(dice: &mut D) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let roll = dice.roll(Self::ALL.len() as u8);
        // `Dice::roll` stays within 1..=sides
        debug_assert!(
            (1..=Self::ALL.len()).contains(&usize::from(roll)),
            "mission roll {roll} out of range"
        );
        Self::from_kind(roll).unwrap_or(Mission::EliminateGreen)
    }

    /// Text shown to the player.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Mission::EliminateGreen => "Eliminate the Green army",
            Mission::HoldTerritories => "Conquer at least 3 territories",
            Mission::ConquerAll => "Conquer every territory on the map",
            Mission::MassTroops => "Command at least 20 troops across your territories",
            Mission::ControlBlue => "Control at least 2 Blue territories",
        }
    }

    /// Check whether `player` has completed this mission on `map`.
    ///
    /// Read-only; repeated calls without an attack in between agree.
    #[must_use]
    pub fn evaluate(self, map: &Map, player: &str) -> bool {
        let done = match self {
            Mission::EliminateGreen => map.count_owned_by(GREEN) == 0,
            Mission::HoldTerritories => map.count_owned_by(player) >= HOLD_TARGET,
            Mission::ConquerAll => map.territories().iter().all(|t| t.is_owned_by(player)),
            Mission::MassTroops => map.sum_troops_owned_by(player) >= TROOP_TARGET,
            Mission::ControlBlue => player == BLUE && map.count_owned_by(BLUE) >= BLUE_TARGET,
        };
        log::debug!("mission {} for {player}: {done}", self.kind());
        done
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
