//! Entry points that tie configuration, setup and orchestration together.

use crate::config::GameConfig;
use crate::console::Console;
use crate::input::parse_moves;
use crate::orchestrator::{Orchestrator, Outcome};
use crate::setup::{build_players, resolve_seats};
use anyhow::{Context, Result};
use noughts_core::{Game, GameState, SearchPlayer};
use tracing::instrument;

/// Plays one interactive game.
#[instrument(skip_all)]
pub async fn play_session(config: &GameConfig, mut console: Console) -> Result<Outcome> {
    console.say("Tic-Tac-Toe (CLI) 3x3 board, rows/cols in 0..2. Type q to quit.")?;
    let seats = resolve_seats(config, &mut console).await?;
    let players = build_players(&seats, config);

    let mut orchestrator = Orchestrator::new(players, console);
    orchestrator.run().await
}

/// Describes the position after `moves` and the best reply, if any.
#[instrument]
pub fn suggest(moves: &str) -> Result<String> {
    let moves = parse_moves(moves)?;
    let game = Game::replay(moves.iter().map(|mv| (mv.row, mv.col)))
        .context("Move sequence is not legal")?;

    let verdict = match game.state() {
        GameState::Won(mark) => format!("Game over: {mark} has won."),
        GameState::Draw => "Game over: it's a draw.".to_string(),
        GameState::InProgress => {
            let mark = game.current_mark();
            match SearchPlayer::from_entropy().best_move(&game) {
                Some(mv) => format!("Best move for {mark}: {} {}", mv.row, mv.col),
                None => format!("No move available for {mark}."),
            }
        }
    };
    Ok(format!("{}\n{verdict}", game.board()))
}
