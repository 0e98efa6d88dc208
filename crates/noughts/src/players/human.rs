//! Human player that types moves at the terminal.

use super::{Player, Turn};
use crate::console::Console;
use crate::input::{is_quit, parse_move};
use anyhow::Result;
use noughts_core::Game;
use tracing::{debug, instrument};

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip_all)]
    async fn get_move(&mut self, game: &Game, console: &mut Console) -> Result<Turn> {
        let mark = game.current_mark();
        loop {
            let prompt = format!("{} ({}), enter your move as 'row col': ", self.name, mark);
            let Some(line) = console.ask(prompt).await? else {
                debug!(player = %self.name, "Input closed, quitting");
                return Ok(Turn::Quit);
            };

            if is_quit(&line) {
                return Ok(Turn::Quit);
            }
            match parse_move(&line) {
                Some(mv) => return Ok(Turn::Play(mv)),
                None => {
                    debug!(player = %self.name, input = %line, "Unparsable move");
                    console.say("Invalid input. Enter two numbers in 0..2, e.g., '1 2'.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
