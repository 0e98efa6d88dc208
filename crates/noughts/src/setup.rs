//! Player setup: fills in names and types that were not configured.

use crate::config::{GameConfig, PlayerConfig, PlayerKind};
use crate::console::Console;
use crate::input::parse_kind;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::Result;
use noughts_core::{Mark, SearchPlayer};
use std::time::Duration;
use tracing::{info, instrument};

/// A player whose name and type are settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Mark this player uses.
    pub mark: Mark,
    /// Display name.
    pub name: String,
    /// Human or computer.
    pub kind: PlayerKind,
}

/// Asks for any name or type missing from `config`.
///
/// Empty answers and end of input fall back to "Player N" and human.
#[instrument(skip_all)]
pub async fn resolve_seats(config: &GameConfig, console: &mut Console) -> Result<[Seat; 2]> {
    let x = resolve_seat(Mark::X, 1, config.player(Mark::X), console).await?;
    let o = resolve_seat(Mark::O, 2, config.player(Mark::O), console).await?;
    Ok([x, o])
}

async fn resolve_seat(
    mark: Mark,
    number: u8,
    player: &PlayerConfig,
    console: &mut Console,
) -> Result<Seat> {
    let default_name = format!("Player {number}");
    let name = match player.name() {
        Some(name) => name.clone(),
        None => console
            .ask(format!("Enter name for Player {number} [default: {default_name}]: "))
            .await?
            .filter(|s| !s.is_empty())
            .unwrap_or(default_name),
    };

    let kind = match player.kind() {
        Some(kind) => *kind,
        None => ask_kind(&name, console).await?,
    };

    info!(%mark, %name, %kind, "Seat resolved");
    Ok(Seat { mark, name, kind })
}

async fn ask_kind(name: &str, console: &mut Console) -> Result<PlayerKind> {
    loop {
        let question = format!("Select type for {name} ([h]uman/[c]omputer, default: human): ");
        let Some(answer) = console.ask(question).await? else {
            return Ok(PlayerKind::Human);
        };
        match parse_kind(&answer) {
            Some(kind) => return Ok(kind),
            None => console.say("Invalid input. Please enter 'h' for human or 'c' for computer.")?,
        }
    }
}

/// Builds the player for each seat.
///
/// Computer players get distinct seeds derived from the configured one so
/// that two computers do not mirror each other's random choices.
pub fn build_players(seats: &[Seat; 2], config: &GameConfig) -> [Box<dyn Player>; 2] {
    seats.clone().map(|seat| -> Box<dyn Player> {
        match seat.kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(seat.name)),
            PlayerKind::Computer => {
                let search = match config.seed() {
                    Some(seed) => SearchPlayer::seeded(seed.wrapping_add(seat_offset(seat.mark))),
                    None => SearchPlayer::from_entropy(),
                };
                Box::new(ComputerPlayer::new(
                    seat.name,
                    search,
                    *config.difficulty(),
                    Duration::from_millis(*config.think_delay_ms()),
                ))
            }
        }
    })
}

fn seat_offset(mark: Mark) -> u64 {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}
