//! Interactive console for scoring a match and managing players.
//!
//! All prompting, parsing, and messaging lives here. The core session
//! only ever sees validated player ids and catalog-resolved event
//! names; recoverable errors are printed and the operator re-prompted.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::catalog::{EventCatalog, EventKind, StandardCatalog};
use crate::directory::PlayerDirectory;
use crate::game::{
    GameError, GameSession, Phase, PlayerId, ROSTER_SIZE, TEAM_SIZE, Team, finalize,
};
use crate::service::StatsService;

/// Prompts and reads one trimmed line from stdin.
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading input")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Runs one full interactive match: seating, scoring, finalization.
#[instrument(skip(service))]
pub fn play(service: &StatsService) -> Result<()> {
    if !service.can_start_match()? {
        println!(
            "Not enough players registered to start a match. \
             Register at least {ROSTER_SIZE} with 'add'."
        );
        return Ok(());
    }

    match seat_roster(service)? {
        Some(session) => run_match(service, session),
        None => Ok(()),
    }
}

/// Seats four players from the available pool, team 1 first.
///
/// Returns `None` if the operator cancels setup.
fn seat_roster(service: &StatsService) -> Result<Option<GameSession>> {
    let mut session = GameSession::new();

    while session.phase() == Phase::Setup {
        let seated = session.roster().players().to_vec();
        let pool = service.seating_pool(&seated)?;

        println!("Available players:");
        for player in &pool {
            println!("  {}. {}", player.id(), player.name());
        }

        let seat = seated.len();
        let team = if seat < TEAM_SIZE { Team::One } else { Team::Two };
        let input = read_line(&format!(
            "Seat {} ({team}) - player id (or 'cancel'): ",
            seat + 1
        ))?;
        if input.eq_ignore_ascii_case("cancel") {
            println!("Match setup cancelled.");
            return Ok(None);
        }

        let Ok(id) = input.parse::<PlayerId>() else {
            println!("Please enter a numeric player id.");
            continue;
        };
        if !pool.iter().any(|p| *p.id() == id) {
            println!("Player {id} is not available.");
            continue;
        }
        if let Err(e) = session.assign_player(id) {
            println!("{e}");
        }
    }

    Ok(Some(session))
}

/// The live match loop: move, undo, gameover, quit.
fn run_match(service: &StatsService, mut session: GameSession) -> Result<()> {
    let catalog = StandardCatalog;

    println!("Match is live. Commands: move, undo, gameover, quit.");
    loop {
        println!("Score: {}", session.score());
        let command = read_line("> ")?.to_ascii_lowercase();

        match command.as_str() {
            "move" => record_one_move(service, &catalog, &mut session)?,
            "undo" => match session.undo_last_move() {
                Ok(action) => println!("Undone move: {action}"),
                Err(GameError::EmptyLog) => println!("There are no moves to undo!"),
                Err(e) => println!("{e}"),
            },
            "gameover" => {
                if session.score().is_tied() {
                    println!("Cannot end the game on a tie! Keep playing.");
                    continue;
                }
                let confirm =
                    read_line("End the game? This is irreversible. Type 'yes' to confirm: ")?;
                if !confirm.eq_ignore_ascii_case("yes") {
                    continue;
                }
                match session.attempt_finish() {
                    Ok(winner) => {
                        let ops = finalize(&session, &catalog)?;
                        service.commit_game(&ops)?;
                        info!(%winner, "Match committed");
                        println!(
                            "{winner} wins {}. Stats recorded for all four players.",
                            session.score()
                        );
                        return Ok(());
                    }
                    Err(GameError::TiedGame) => {
                        println!("Cannot end the game on a tie! Keep playing.")
                    }
                    Err(e) => println!("{e}"),
                }
            }
            "quit" => {
                let confirm =
                    read_line("Abandon the match? Nothing will be saved. Type 'yes' to confirm: ")?;
                if confirm.eq_ignore_ascii_case("yes") {
                    println!("Match abandoned.");
                    return Ok(());
                }
            }
            other => {
                println!("'{other}' is not a valid command. Type move, undo, gameover, or quit.")
            }
        }
    }
}

/// Prompts for one move (actor seat plus event) and records it.
///
/// Invalid input rejects this single move and returns to the match loop
/// with the session unchanged.
fn record_one_move(
    service: &StatsService,
    catalog: &impl EventCatalog,
    session: &mut GameSession,
) -> Result<()> {
    let directory = service.repository();

    println!("Seats:");
    for (seat, &id) in session.roster().players().iter().enumerate() {
        let name = directory
            .name_of(id)
            .unwrap_or_else(|| format!("Player {id}"));
        println!("  {}. {}", seat + 1, name);
    }

    let input = read_line(&format!("Seat number of the acting player (1-{ROSTER_SIZE}): "))?;
    let Ok(seat) = input.parse::<usize>() else {
        println!("Please enter a seat number.");
        return Ok(());
    };
    if !(1..=ROSTER_SIZE).contains(&seat) {
        println!("Seat must be between 1 and {ROSTER_SIZE}.");
        return Ok(());
    }
    let actor = session.roster().players()[seat - 1];

    println!("Events:");
    for kind in EventKind::iter() {
        println!("  {kind}");
    }
    let input = read_line("Name of the action: ")?;
    let Some(kind) = catalog.resolve(&input) else {
        println!("'{}' is not a recognized event.", input.trim());
        return Ok(());
    };

    match session.record_move(directory, actor, &kind.to_string()) {
        Ok(action) => println!("{action}"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Registers a new player.
#[instrument(skip(service))]
pub fn add_player(service: &StatsService, name: String) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        println!("Player name cannot be empty.");
        return Ok(());
    }
    let player = service.add_player(name)?;
    println!("Added player {} ({})", player.name(), player.id());
    Ok(())
}

/// Deletes a player by id.
#[instrument(skip(service))]
pub fn remove_player(service: &StatsService, id: PlayerId) -> Result<()> {
    match service.remove_player(id)? {
        Some(player) => println!("Deleted player {} ({})", player.name(), player.id()),
        None => println!("No player with id {id}."),
    }
    Ok(())
}

/// Prints all registered players.
#[instrument(skip(service))]
pub fn list_players(service: &StatsService) -> Result<()> {
    let players = service.players()?;
    if players.is_empty() {
        println!("No players registered yet.");
        return Ok(());
    }
    println!("Players:");
    for player in &players {
        println!("  {}. {}", player.id(), player.name());
    }
    Ok(())
}

/// Prints one player's full stat sheet.
#[instrument(skip(service))]
pub fn show_stats(service: &StatsService, id: PlayerId) -> Result<()> {
    let Some(player) = service.player(id)? else {
        println!("No player with id {id}.");
        return Ok(());
    };
    println!("Stats for {}:", player.name());
    for (label, value) in player.stat_lines() {
        println!("  {label}: {value}");
    }
    Ok(())
}
