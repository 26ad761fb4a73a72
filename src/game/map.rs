//! The territory map.
//!
//! Positions handed to and from players are 1-based; storage is 0-based.

use serde::Serialize;

use crate::error::{GameError, GameResult};
use crate::game::Territory;

/// One row of the read-only map dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerritoryRow<'a> {
    /// 1-based position on the map.
    pub position: usize,
    /// Territory name.
    pub name: &'a str,
    /// Controlling faction.
    pub owner: &'a str,
    /// Garrisoned troops.
    pub troops: u32,
}

/// Fixed-size ordered collection of territories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    territories: Vec<Territory>,
}

impl Map {
    /// Create a map of `size` blank territories, to be filled in during setup.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MapTooSmall`] if `size < min_territories`, or
    /// [`GameError::Allocation`] if the storage cannot be reserved.
    pub fn new(size: usize, min_territories: usize) -> GameResult<Self> {
        if size < min_territories {
            return Err(GameError::MapTooSmall {
                size,
                min: min_territories,
            });
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(size)
            .map_err(|_| GameError::Allocation { size })?;
        territories.resize_with(size, Territory::default);

        Ok(Self { territories })
    }

    /// Build a map from already populated territories.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MapTooSmall`] if fewer than `min_territories` are given.
    pub fn from_territories(
        territories: Vec<Territory>,
        min_territories: usize,
    ) -> GameResult<Self> {
        if territories.len() < min_territories {
            return Err(GameError::MapTooSmall {
                size: territories.len(),
                min: min_territories,
            });
        }
        Ok(Self { territories })
    }

    /// Number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Whether the map holds no territories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Territories in map order.
    #[must_use]
    #[inline]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    fn index_of(&self, position: usize) -> GameResult<usize> {
        if position == 0 || position > self.territories.len() {
            return Err(GameError::OutOfRange {
                position,
                size: self.territories.len(),
            });
        }
        Ok(position - 1)
    }

    /// Get the territory at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `[1, len]`.
    pub fn get(&self, position: usize) -> GameResult<&Territory> {
        let idx = self.index_of(position)?;
        Ok(&self.territories[idx])
    }

    /// Get a mutable territory at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `[1, len]`.
    pub fn get_mut(&mut self, position: usize) -> GameResult<&mut Territory> {
        let idx = self.index_of(position)?;
        Ok(&mut self.territories[idx])
    }

    /// Replace the territory at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] outside `[1, len]`.
    pub fn set(&mut self, position: usize, territory: Territory) -> GameResult<()> {
        *self.get_mut(position)? = territory;
        Ok(())
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for a bad position and
    /// [`GameError::SelfAttack`] if both positions are the same.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> GameResult<(&mut Territory, &mut Territory)> {
        let a = self.index_of(first)?;
        let b = self.index_of(second)?;
        if a == b {
            return Err(GameError::SelfAttack { position: first });
        }

        if a < b {
            let (head, tail) = self.territories.split_at_mut(b);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(a);
            Ok((&mut tail[0], &mut head[b]))
        }
    }

    /// Iterate over `(position, territory)` pairs, positions starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Territory)> {
        self.territories.iter().enumerate().map(|(idx, t)| (idx + 1, t))
    }

    /// Territories controlled by `faction`.
    pub fn owned_by<'a>(&'a self, faction: &'a str) -> impl Iterator<Item = &'a Territory> {
        self.territories.iter().filter(move |t| t.is_owned_by(faction))
    }

    /// Count territories controlled by `faction`.
    #[must_use]
    pub fn count_owned_by(&self, faction: &str) -> usize {
        self.owned_by(faction).count()
    }

    /// Sum troops across territories controlled by `faction`.
    #[must_use]
    pub fn sum_troops_owned_by(&self, faction: &str) -> u64 {
        self.owned_by(faction).map(|t| u64::from(t.troops())).sum()
    }

    /// The faction holding every territory, if there is one.
    #[must_use]
    pub fn sole_owner(&self) -> Option<&str> {
        let first = self.territories.first()?.owner();
        self.territories
            .iter()
            .all(|t| t.owner() == first)
            .then_some(first)
    }

    /// Read-only projection of the map, one row per territory in map order.
    #[must_use]
    pub fn rows(&self) -> Vec<TerritoryRow<'_>> {
        self.iter()
            .map(|(position, t)| TerritoryRow {
                position,
                name: t.name(),
                owner: t.owner(),
                troops: t.troops(),
            })
            .collect()
    }
}
