//! Plain-text rendering of the map and of battle results.
//!
//! Output format:
//! ```text
//! ID  | Name                      | Color      | Troops
//! ----------------------------------------------------------
//! 1   | Brasil                    | Red        | 5
//! 2   | Argentina                 | Blue       | 3
//! ```

// Allow format! with push_str for readability - the allocation overhead is negligible for text rendering
#![allow(clippy::format_push_string)]

use crate::game::{AttackOutcome, GameStatus, Map, Mission, RoundWinner, Territory};

const RULE: &str = "----------------------------------------------------------";

/// Render the map as a table, one row per territory in map order.
#[must_use]
pub fn render_table(map: &Map) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<3} | {:<25} | {:<10} | {:<6}\n",
        "ID", "Name", "Color", "Troops"
    ));
    output.push_str(RULE);
    output.push('\n');

    for row in map.rows() {
        output.push_str(&format!(
            "{:<3} | {:<25} | {:<10} | {:<6}\n",
            row.position, row.name, row.owner, row.troops
        ));
    }

    output
}

/// Narrate a resolved round. `attacker` and `defender` are read after the round.
#[must_use]
pub fn render_battle(attacker: &Territory, defender: &Territory, outcome: &AttackOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!("Attack die: {}\n", outcome.attack_roll));
    output.push_str(&format!("Defense die: {}\n\n", outcome.defense_roll));

    match outcome.winner {
        RoundWinner::Attacker => {
            output.push_str("The attacker won the round!\n");
            if outcome.conquered {
                output.push_str(&format!(
                    "{} was conquered by the {} army! {} troops moved in.\n",
                    defender.name(),
                    defender.owner(),
                    outcome.transferred
                ));
            }
        }
        RoundWinner::Defender => output.push_str("The defender held the line!\n"),
    }

    output.push_str("\n--- After the battle ---\n");
    output.push_str(&format!(
        "{} ({}) - Troops: {} ({:+})\n",
        attacker.name(),
        attacker.owner(),
        attacker.troops(),
        outcome.attacker.delta()
    ));
    output.push_str(&format!(
        "{} ({}) - Troops: {} ({:+})\n",
        defender.name(),
        defender.owner(),
        defender.troops(),
        outcome.defender.delta()
    ));

    output
}

/// Describe the player's mission and whether it is complete.
#[must_use]
pub fn render_mission(mission: Mission, complete: bool) -> String {
    let state = if complete { "COMPLETE" } else { "in progress" };
    format!("Mission {}: {} [{state}]\n", mission.kind(), mission.description())
}

/// Closing banner for a finished game.
#[must_use]
pub fn render_game_over(status: GameStatus, map: &Map, player: &str) -> Option<String> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::MissionComplete => Some(format!(
            "VICTORY! The {player} army completed its mission.\n"
        )),
        GameStatus::Domination => {
            let owner = map.sole_owner().unwrap_or(player);
            Some(format!("TOTAL VICTORY! The {owner} army conquered every territory.\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{resolve_attack, ScriptedDice};

    #[test]
    fn test_table_layout() {
        let map = Map::from_territories(
            vec![
                Territory::new("Brasil", "Red", 5),
                Territory::new("Argentina", "Blue", 3),
            ],
            2,
        )
        .unwrap();
        let table = render_table(&map);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  | Name"));
        assert_eq!(
            lines[2],
            "1   | Brasil                    | Red        | 5     "
        );
        assert!(lines[3].contains("Argentina"));
    }

    #[test]
    fn test_battle_narration_on_conquest() {
        let mut a = Territory::new("Brasil", "Red", 5);
        let mut d = Territory::new("Chile", "Blue", 1);
        let outcome = resolve_attack(&mut a, &mut d, &mut ScriptedDice::new([6, 1])).unwrap();

        let text = render_battle(&a, &d, &outcome);
        assert!(text.contains("Attack die: 6"));
        assert!(text.contains("Chile was conquered by the Red army! 2 troops moved in."));
        assert!(text.contains("Brasil (Red) - Troops: 3 (-2)"));
        assert!(text.contains("Chile (Red) - Troops: 2 (+1)"));
    }

    #[test]
    fn test_battle_narration_on_defense() {
        let mut a = Territory::new("Brasil", "Red", 5);
        let mut d = Territory::new("Chile", "Blue", 1);
        let outcome = resolve_attack(&mut a, &mut d, &mut ScriptedDice::new([2, 2])).unwrap();

        let text = render_battle(&a, &d, &outcome);
        assert!(text.contains("The defender held the line!"));
        assert!(!text.contains("conquered"));
    }

    #[test]
    fn test_game_over_banner() {
        let map = Map::from_territories(
            vec![Territory::new("A", "Red", 1), Territory::new("B", "Red", 1)],
            2,
        )
        .unwrap();
        assert!(render_game_over(GameStatus::Ongoing, &map, "Red").is_none());
        assert!(render_game_over(GameStatus::Domination, &map, "Blue")
            .unwrap()
            .contains("Red army conquered every territory"));
        assert!(render_mission(Mission::ConquerAll, true).contains("COMPLETE"));
    }
}
