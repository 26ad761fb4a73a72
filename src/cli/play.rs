//! Play command implementation: registration, menu loop and narration.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use conquest::game::{DEFAULT_MIN_TERRITORIES, STRICT_MIN_TERRITORIES};
use conquest::render::{render_battle, render_game_over, render_mission, render_table};
use conquest::scenario::Scenario;
use conquest::{Dice, GameConfig, GameError, Map, Mission, Session, Territory};

use super::prompt::Prompter;
use super::CliError;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if setup fails or the terminal goes away.
pub(crate) fn execute(
    scenario: Option<PathBuf>,
    seed: Option<u64>,
    strict: bool,
    mission: Option<u8>,
) -> Result<(), CliError> {
    let config = GameConfig {
        min_territories: if strict {
            STRICT_MIN_TERRITORIES
        } else {
            DEFAULT_MIN_TERRITORIES
        },
        seed,
        ..GameConfig::default()
    };
    let dice = config.dice();
    log::info!("dice seed {}", dice.seed());

    let mission = mission
        .map(|kind| {
            Mission::from_kind(kind)
                .ok_or_else(|| CliError::new(format!("Unknown mission {kind} (expected 1-5)")))
        })
        .transpose()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompter::new(stdin.lock(), stdout.lock());

    let session = match scenario {
        Some(path) => {
            let scenario = Scenario::load(&path)?;
            let map = scenario.build_map(&config)?;
            let mission = match mission {
                Some(m) => Some(m),
                None => scenario.mission()?,
            };
            Some(start_session(map, &scenario.player, mission, dice))
        }
        None => register(&mut prompt, &config, mission, dice)?,
    };

    if let Some(mut session) = session {
        run(&mut prompt, &mut session)?;
    }
    writeln!(prompt.out(), "\nGame over. See you at the next battle!")?;
    Ok(())
}

fn start_session<D: Dice>(
    map: Map,
    player: &str,
    mission: Option<Mission>,
    dice: D,
) -> Session<D> {
    match mission {
        Some(mission) => Session::new(map, player, mission, dice),
        None => Session::with_random_mission(map, player, dice),
    }
}

/// Interactive registration. `None` if the input ran out first.
fn register<R: BufRead, W: Write, D: Dice>(
    prompt: &mut Prompter<R, W>,
    config: &GameConfig,
    mission: Option<Mission>,
    dice: D,
) -> Result<Option<Session<D>>, CliError> {
    writeln!(prompt.out(), "==============================================")?;
    writeln!(prompt.out(), "               GAME SETUP - WAR               ")?;
    writeln!(prompt.out(), "==============================================\n")?;

    let mut map = loop {
        let Some(size) = prompt.parsed::<usize>("Number of territories: ")? else {
            return Ok(None);
        };
        match config.new_map(size) {
            Ok(map) => break map,
            Err(e @ (GameError::MapTooSmall { .. } | GameError::MapTooLarge { .. })) => {
                writeln!(prompt.out(), "{e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    };

    for position in 1..=map.len() {
        writeln!(prompt.out(), "\n--- Registering territory {position} ---")?;
        let Some(name) = prompt.line("Territory name: ")? else {
            return Ok(None);
        };
        let Some(owner) = prompt.line("Army color: ")? else {
            return Ok(None);
        };
        let Some(troops) = prompt.parsed::<u32>("Number of troops: ")? else {
            return Ok(None);
        };

        let territory = Territory::new(&name, &owner, troops);
        writeln!(
            prompt.out(),
            "Territory '{}' ({}) registered with {} troops!",
            territory.name(),
            territory.owner(),
            territory.troops()
        )?;
        map.set(position, territory)?;
    }

    let Some(player) = prompt.line("\nYour army color: ")? else {
        return Ok(None);
    };
    Ok(Some(start_session(map, &player, mission, dice)))
}

/// Menu loop until the game ends or the player leaves.
fn run<R: BufRead, W: Write, D: Dice>(
    prompt: &mut Prompter<R, W>,
    session: &mut Session<D>,
) -> Result<(), CliError> {
    writeln!(prompt.out(), "\nYou command the {} army.", session.player())?;
    write!(prompt.out(), "{}", render_mission(session.mission(), false))?;

    loop {
        writeln!(prompt.out(), "\n==============================================")?;
        writeln!(prompt.out(), "                  MAP STATUS                  ")?;
        writeln!(prompt.out(), "==============================================")?;
        write!(prompt.out(), "{}", render_table(session.map()))?;
        writeln!(prompt.out(), "\n1 - Attack\n2 - Check mission\n0 - Exit")?;

        let Some(choice) = prompt.parsed::<u8>("Choose an option: ")? else {
            return Ok(());
        };

        match choice {
            0 => return Ok(()),
            1 => {
                if attack_turn(prompt, session)? {
                    return Ok(());
                }
            }
            2 => {
                let complete = session.check_mission();
                write!(prompt.out(), "{}", render_mission(session.mission(), complete))?;
            }
            _ => writeln!(prompt.out(), "Invalid option.")?,
        }
    }
}

/// One attack from the menu. Returns `true` once the game is over.
fn attack_turn<R: BufRead, W: Write, D: Dice>(
    prompt: &mut Prompter<R, W>,
    session: &mut Session<D>,
) -> Result<bool, CliError> {
    let size = session.map().len();
    let Some(attacker) = prompt.parsed::<usize>(&format!("\nAttacking territory (1-{size}): "))?
    else {
        return Ok(true);
    };
    let Some(defender) = prompt.parsed::<usize>(&format!("Defending territory (1-{size}): "))?
    else {
        return Ok(true);
    };

    let report = match session.attack(attacker, defender) {
        Ok(report) => report,
        Err(e) if e.is_recoverable() => {
            writeln!(prompt.out(), "{e}")?;
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let map = session.map();
    writeln!(prompt.out(), "\n==============================================")?;
    writeln!(prompt.out(), "                    BATTLE                    ")?;
    writeln!(prompt.out(), "==============================================")?;
    write!(
        prompt.out(),
        "{}",
        render_battle(map.get(attacker)?, map.get(defender)?, &report.outcome)
    )?;

    match render_game_over(report.status, map, session.player()) {
        Some(banner) => {
            writeln!(prompt.out())?;
            write!(prompt.out(), "{banner}")?;
            write!(prompt.out(), "{}", render_table(map))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
