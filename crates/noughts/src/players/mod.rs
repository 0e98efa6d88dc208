//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use noughts_core::{Game, Move};

/// What a player decided to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Place the current mark here.
    Play(Move),
    /// Leave the game without a result.
    Quit,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the mark currently to move.
    async fn get_move(&mut self, game: &Game, console: &mut Console) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
