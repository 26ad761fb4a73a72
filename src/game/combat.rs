//! Combat resolution.
//!
//! One call resolves exactly one round: each side rolls a d6, the attacker
//! must roll strictly higher to win, and the loser of the round gives up a
//! single troop. When the defender runs out of troops the territory changes
//! hands and half of the attacking garrison (at least one troop) moves in.

use serde::Serialize;

use crate::error::{GameError, GameResult};
use crate::game::{Dice, Map, Territory};

/// Which side won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundWinner {
    /// Attacker rolled strictly higher.
    Attacker,
    /// Defender rolled higher or tied.
    Defender,
}

/// Troop count of one territory before and after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TroopChange {
    /// Troops before the round.
    pub before: u32,
    /// Troops after the round.
    pub after: u32,
}

impl TroopChange {
    /// Signed change in troops.
    #[must_use]
    pub fn delta(&self) -> i64 {
        i64::from(self.after) - i64::from(self.before)
    }
}

/// Everything the UI needs to narrate a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    /// Attacker's die.
    pub attack_roll: u8,
    /// Defender's die.
    pub defense_roll: u8,
    /// Winner of the round.
    pub winner: RoundWinner,
    /// Attacking territory's garrison.
    pub attacker: TroopChange,
    /// Defending territory's garrison.
    pub defender: TroopChange,
    /// Whether the defending territory changed hands.
    pub conquered: bool,
    /// Troops moved into the conquered territory (0 without conquest).
    pub transferred: u32,
}

/// Troops that move into a freshly conquered territory.
#[must_use]
pub const fn conquest_transfer(attacker_troops: u32) -> u32 {
    let half = attacker_troops / 2;
    if half == 0 { 1 } else { half }
}

/// Resolve a single round between two territories.
///
/// Same-territory and same-faction checks belong to the caller (see
/// [`process_attack`]); the only check made here is that the attacker can
/// spare a troop.
///
/// # Errors
///
/// Returns [`GameError::InsufficientTroops`] if the attacker has one troop
/// or fewer. Neither territory is touched in that case.
pub fn resolve_attack<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> GameResult<AttackOutcome> {
    if attacker.troops() <= 1 {
        return Err(GameError::InsufficientTroops {
            troops: attacker.troops(),
        });
    }

    let attacker_before = attacker.troops();
    let defender_before = defender.troops();

    let attack_roll = dice.roll_d6();
    let defense_roll = dice.roll_d6();
    log::debug!(
        "{} ({}) rolls {attack_roll} against {} ({}) rolling {defense_roll}",
        attacker.name(),
        attacker.owner(),
        defender.name(),
        defender.owner()
    );

    let mut conquered = false;
    let mut transferred = 0;

    // Ties go to the defender
    let winner = if attack_roll > defense_roll {
        defender.set_troops(defender.troops().saturating_sub(1));
        if defender.troops() == 0 {
            transferred = conquest_transfer(attacker.troops());
            defender.take_owner_from(attacker);
            defender.set_troops(transferred);
            attacker.set_troops(attacker.troops() - transferred);
            conquered = true;
            log::info!(
                "{} conquered by {} with {transferred} troops",
                defender.name(),
                defender.owner()
            );
        }
        RoundWinner::Attacker
    } else {
        attacker.set_troops(attacker.troops() - 1);
        RoundWinner::Defender
    };

    Ok(AttackOutcome {
        attack_roll,
        defense_roll,
        winner,
        attacker: TroopChange {
            before: attacker_before,
            after: attacker.troops(),
        },
        defender: TroopChange {
            before: defender_before,
            after: defender.troops(),
        },
        conquered,
        transferred,
    })
}

/// Run the attack guards for two map positions, then resolve one round.
///
/// # Errors
///
/// - [`GameError::OutOfRange`] if either position is outside the map.
/// - [`GameError::SelfAttack`] if both positions are equal.
/// - [`GameError::SameFaction`] if both territories share an owner.
/// - [`GameError::InsufficientTroops`] if the attacker cannot spare a troop.
///
/// The map is unchanged whenever an error is returned.
pub fn process_attack<D: Dice + ?Sized>(
    map: &mut Map,
    attacker_pos: usize,
    defender_pos: usize,
    dice: &mut D,
) -> GameResult<AttackOutcome> {
    let (attacker, defender) = map.pair_mut(attacker_pos, defender_pos)?;
    if attacker.owner() == defender.owner() {
        return Err(GameError::SameFaction);
    }
    resolve_attack(attacker, defender, dice)
}
