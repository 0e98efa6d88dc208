//! Computer player backed by the search player.

use super::{Player, Turn};
use crate::console::Console;
use anyhow::Result;
use noughts_core::{Difficulty, Game, SearchPlayer};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer player that searches for its moves.
pub struct ComputerPlayer {
    name: String,
    search: SearchPlayer,
    difficulty: Difficulty,
    think: Duration,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(
        name: impl Into<String>,
        search: SearchPlayer,
        difficulty: Difficulty,
        think: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            search,
            difficulty,
            think,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all)]
    async fn get_move(&mut self, game: &Game, console: &mut Console) -> Result<Turn> {
        let mark = game.current_mark();
        console.say(format!("{} ({}) [computer] is thinking...", self.name, mark))?;

        // Small delay so the opponent can follow along
        tokio::time::sleep(self.think).await;

        let Some(mv) = self.search.choose_move(game, self.difficulty) else {
            anyhow::bail!("No valid moves left");
        };
        debug!(player = %self.name, difficulty = %self.difficulty, %mv, "Computer chose move");
        console.say(format!(
            "{} ({}) [computer] plays: {} {}",
            self.name, mark, mv.row, mv.col
        ))?;
        Ok(Turn::Play(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
