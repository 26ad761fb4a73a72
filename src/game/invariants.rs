//! Map invariants - sanity checks that detect bugs.
//!
//! These should never trigger once setup is done; a violation means the
//! combat code left the map in a state players must never see.

use crate::game::{Map, NAME_MAX_CHARS, OWNER_MAX_CHARS};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check the invariants that must hold between turns.
///
/// `garrisoned` lists 1-based positions that combat has touched; those must
/// hold at least one troop. Territories registered with zero troops and never
/// fought over are legal.
#[must_use]
pub fn check_invariants(map: &Map, garrisoned: &[usize]) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (position, territory) in map.iter() {
        if territory.name().chars().count() > NAME_MAX_CHARS {
            violations.push(InvariantViolation {
                message: format!(
                    "Territory {position} name exceeds {NAME_MAX_CHARS} characters"
                ),
            });
        }
        if territory.owner().chars().count() > OWNER_MAX_CHARS {
            violations.push(InvariantViolation {
                message: format!(
                    "Territory {position} owner exceeds {OWNER_MAX_CHARS} characters"
                ),
            });
        }
    }

    for &position in garrisoned {
        match map.get(position) {
            Ok(territory) if territory.troops() == 0 => violations.push(InvariantViolation {
                message: format!("Territory {position} was left without troops after combat"),
            }),
            Ok(_) => {}
            Err(e) => violations.push(InvariantViolation {
                message: format!("Combat touched a position off the map: {e}"),
            }),
        }
    }

    violations
}

/// Assert all map invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(map: &Map, garrisoned: &[usize]) {
    let violations = check_invariants(map, garrisoned);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Map invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_map: &Map, _garrisoned: &[usize]) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Territory;

    #[test]
    fn test_clean_map_has_no_violations() {
        let map = Map::from_territories(
            vec![Territory::new("Brasil", "Red", 3), Territory::new("Chile", "Blue", 0)],
            2,
        )
        .unwrap();
        assert!(check_invariants(&map, &[1]).is_empty());
    }

    #[test]
    fn test_empty_garrison_after_combat_is_flagged() {
        let map = Map::from_territories(
            vec![Territory::new("Brasil", "Red", 3), Territory::new("Chile", "Blue", 0)],
            2,
        )
        .unwrap();
        let violations = check_invariants(&map, &[1, 2]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Territory 2"));
    }

    #[test]
    fn test_bad_position_is_flagged() {
        let map = Map::new(2, 2).unwrap();
        assert_eq!(check_invariants(&map, &[3]).len(), 1);
    }
}
