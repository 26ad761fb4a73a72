//! Monte Carlo estimate of how often an attack ends in conquest.
//!
//! Each trial keeps attacking with fresh seeded dice until the defender falls
//! or the attacker is down to its last troop. Trials are independent, so they
//! run in parallel with a fold/reduce over per-thread tallies.

// Rates and means are intentional integer-to-float conversions
#![allow(clippy::cast_precision_loss)]

use rayon::prelude::*;
use serde::Serialize;

use crate::game::{resolve_attack, Dice, GameRng, Territory};

/// Outcome of one repeated attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiegeResult {
    /// Whether the defender fell.
    pub conquered: bool,
    /// Rounds fought.
    pub rounds: u64,
    /// Troops left in the attacking territory.
    pub attacker_left: u32,
}

/// Attack round after round until conquest or the attacker must stop.
pub fn simulate_siege<D: Dice + ?Sized>(
    attacker_troops: u32,
    defender_troops: u32,
    dice: &mut D,
) -> SiegeResult {
    let mut attacker = Territory::new("Attacker", "Attacker", attacker_troops);
    let mut defender = Territory::new("Defender", "Defender", defender_troops);
    let mut rounds: u64 = 0;

    while let Ok(outcome) = resolve_attack(&mut attacker, &mut defender, dice) {
        rounds += 1;
        if outcome.conquered {
            return SiegeResult {
                conquered: true,
                rounds,
                attacker_left: attacker.troops(),
            };
        }
    }

    SiegeResult {
        conquered: false,
        rounds,
        attacker_left: attacker.troops(),
    }
}

/// Aggregated trial statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OddsReport {
    /// Trials run.
    pub trials: u64,
    /// Trials ending in conquest.
    pub conquests: u64,
    /// Rounds fought across all trials.
    pub total_rounds: u64,
    /// Attacker troops left across all trials.
    pub total_attacker_left: u64,
}

impl OddsReport {
    /// Add one trial.
    pub fn add(&mut self, result: &SiegeResult) {
        self.trials += 1;
        self.conquests += u64::from(result.conquered);
        self.total_rounds += result.rounds;
        self.total_attacker_left += u64::from(result.attacker_left);
    }

    /// Merge another tally into this one.
    pub fn merge(&mut self, other: &OddsReport) {
        self.trials += other.trials;
        self.conquests += other.conquests;
        self.total_rounds += other.total_rounds;
        self.total_attacker_left += other.total_attacker_left;
    }

    /// Fraction of trials ending in conquest (0.0-1.0).
    #[must_use]
    pub fn conquest_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.conquests as f64 / self.trials as f64
    }

    /// Mean rounds per trial.
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.trials as f64
    }

    /// Mean attacker troops left per trial.
    #[must_use]
    pub fn mean_attacker_left(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_attacker_left as f64 / self.trials as f64
    }
}

/// Run `trials` independent sieges in parallel.
///
/// Trial `i` uses dice seeded with `seed + i`, so a report is reproducible
/// regardless of thread count.
#[must_use]
pub fn estimate_odds(
    attacker_troops: u32,
    defender_troops: u32,
    trials: u64,
    seed: u64,
) -> OddsReport {
    let report = (0..trials)
        .into_par_iter()
        .fold(OddsReport::default, |mut local, i| {
            let mut dice = GameRng::new(seed.wrapping_add(i));
            local.add(&simulate_siege(attacker_troops, defender_troops, &mut dice));
            local
        })
        .reduce(OddsReport::default, |mut a, b| {
            a.merge(&b);
            a
        });

    log::debug!(
        "{attacker_troops} vs {defender_troops}: {}/{} conquests",
        report.conquests,
        report.trials
    );
    report
}
