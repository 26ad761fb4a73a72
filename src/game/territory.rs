//! Territory records and bounded text labels.

use serde::Serialize;

/// Maximum visible characters kept for a territory name.
pub const NAME_MAX_CHARS: usize = 29;

/// Maximum visible characters kept for a faction label.
///
/// Mission predicates compare against truncated labels, so the player's own
/// faction must go through [`bounded_label`] as well.
pub const OWNER_MAX_CHARS: usize = 9;

/// Truncate free text to at most `max_chars` characters.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Normalize a faction label the way the map stores it.
#[must_use]
pub fn bounded_label(label: &str) -> String {
    truncate_chars(label, OWNER_MAX_CHARS)
}

/// A single map cell: a name, the faction holding it, and its garrison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Territory {
    name: String,
    owner: String,
    troops: u32,
}

impl Territory {
    /// Create a territory, truncating `name` and `owner` to their bounds.
    #[must_use]
    pub fn new(name: &str, owner: &str, troops: u32) -> Self {
        Self {
            name: truncate_chars(name, NAME_MAX_CHARS),
            owner: bounded_label(owner),
            troops,
        }
    }

    /// Territory name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Controlling faction.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Garrisoned troops.
    #[must_use]
    pub const fn troops(&self) -> u32 {
        self.troops
    }

    /// Check whether `faction` controls this territory (exact match).
    #[must_use]
    pub fn is_owned_by(&self, faction: &str) -> bool {
        self.owner == faction
    }

    pub(crate) fn set_troops(&mut self, troops: u32) {
        self.troops = troops;
    }

    /// Hand the territory over to the faction of `conqueror`.
    pub(crate) fn take_owner_from(&mut self, conqueror: &Territory) {
        self.owner.clone_from(&conqueror.owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_truncated_to_nine_chars() {
        let t = Territory::new("Brasil", "Vermelhissimo", 3);
        assert_eq!(t.owner(), "Vermelhis");
        assert_eq!(t.owner().chars().count(), OWNER_MAX_CHARS);
    }

    #[test]
    fn test_name_truncated() {
        let long = "A".repeat(40);
        let t = Territory::new(&long, "Red", 1);
        assert_eq!(t.name().len(), NAME_MAX_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("Açaílândia", 4), "Açaí");
        assert_eq!(truncate_chars("Red", 9), "Red");
        assert_eq!(truncate_chars("", 9), "");
    }

    #[test]
    fn test_short_labels_kept_verbatim() {
        let t = Territory::new("Chile", "Blue", 0);
        assert!(t.is_owned_by("Blue"));
        assert!(!t.is_owned_by("blue"));
        assert_eq!(t.troops(), 0);
    }

    #[test]
    fn test_take_owner_from() {
        let attacker = Territory::new("Peru", "Red", 4);
        let mut defender = Territory::new("Chile", "Blue", 1);
        defender.take_owner_from(&attacker);
        assert_eq!(defender.owner(), "Red");
        assert_eq!(defender.name(), "Chile");
    }
}
