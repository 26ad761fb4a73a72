//! Output formatting utilities for CLI.

use conquest::game::TerritoryRow;
use conquest::odds::OddsReport;
use conquest::{Map, Mission};
use serde::Serialize;

/// JSON-serializable mission check.
#[derive(Debug, Serialize)]
pub(super) struct JsonMission {
    /// Mission kind (1-5).
    kind: u8,
    /// Mission text.
    description: &'static str,
    /// Whether the player has completed it.
    complete: bool,
}

/// JSON-serializable scenario check.
#[derive(Debug, Serialize)]
pub(super) struct JsonCheck<'a> {
    /// Player faction.
    player: &'a str,
    /// Mission fixed by the scenario, if any.
    assigned: Option<u8>,
    /// Map rows in order.
    territories: Vec<TerritoryRow<'a>>,
    /// Every mission evaluated for the player.
    missions: Vec<JsonMission>,
}

impl<'a> JsonCheck<'a> {
    /// Evaluate every mission for `player` on `map`.
    pub(super) fn new(map: &'a Map, player: &'a str, assigned: Option<Mission>) -> Self {
        Self {
            player,
            assigned: assigned.map(Mission::kind),
            territories: map.rows(),
            missions: Mission::ALL
                .iter()
                .map(|m| JsonMission {
                    kind: m.kind(),
                    description: m.description(),
                    complete: m.evaluate(map, player),
                })
                .collect(),
        }
    }
}

/// Format every mission's state as text.
pub(super) fn format_missions_text(map: &Map, player: &str, assigned: Option<Mission>) -> String {
    let mut output = format!("Missions for the {player} army:\n");
    for mission in Mission::ALL {
        let marker = if assigned == Some(mission) { '*' } else { ' ' };
        let state = if mission.evaluate(map, player) {
            "complete"
        } else {
            "open"
        };
        output.push_str(&format!(
            " {marker} {}. {:<52} {state}\n",
            mission.kind(),
            mission.description()
        ));
    }
    output
}

/// JSON-serializable odds estimate.
#[derive(Debug, Serialize)]
pub(super) struct JsonOdds {
    /// Attacker starting troops.
    attacker: u32,
    /// Defender starting troops.
    defender: u32,
    /// Base seed.
    seed: u64,
    /// Raw tallies.
    #[serde(flatten)]
    report: OddsReport,
    /// Conquest rate (0.0-1.0).
    conquest_rate: f64,
    /// Mean rounds per trial.
    mean_rounds: f64,
    /// Mean attacker troops left.
    mean_attacker_left: f64,
}

impl JsonOdds {
    /// Create from a report.
    pub(super) fn new(attacker: u32, defender: u32, seed: u64, report: OddsReport) -> Self {
        Self {
            attacker,
            defender,
            seed,
            report,
            conquest_rate: report.conquest_rate(),
            mean_rounds: report.mean_rounds(),
            mean_attacker_left: report.mean_attacker_left(),
        }
    }
}

/// Format an odds estimate as human-readable text.
pub(super) fn format_odds_text(attacker: u32, defender: u32, report: &OddsReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Attack odds: {attacker} vs {defender} troops ({} trials)\n",
        report.trials
    ));
    output.push_str("========================================\n");
    output.push_str(&format!(
        "  Conquest rate: {:.1}% ({} conquests)\n",
        report.conquest_rate() * 100.0,
        report.conquests
    ));
    output.push_str(&format!("  Mean rounds: {:.2}\n", report.mean_rounds()));
    output.push_str(&format!(
        "  Mean attacker troops left: {:.2}\n",
        report.mean_attacker_left()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquest::Territory;

    #[test]
    fn test_missions_text_marks_assigned() {
        let map = Map::from_territories(
            vec![Territory::new("A", "Red", 1), Territory::new("B", "Blue", 1)],
            2,
        )
        .unwrap();
        let text = format_missions_text(&map, "Red", Some(Mission::EliminateGreen));
        assert!(text.contains(" * 1."));
        assert!(text.lines().nth(1).unwrap().ends_with("complete"));
        assert!(text.lines().nth(3).unwrap().ends_with("open"));
    }

    #[test]
    fn test_check_json_shape() {
        let map = Map::from_territories(
            vec![Territory::new("A", "Red", 1), Territory::new("B", "Red", 1)],
            2,
        )
        .unwrap();
        let json = serde_json::to_value(JsonCheck::new(&map, "Red", None)).unwrap();
        assert_eq!(json["missions"][2]["complete"], true);
        assert_eq!(json["territories"][1]["position"], 2);
        assert!(json["assigned"].is_null());
    }
}
