//! Rule checks over a board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::types::{Board, GameState};

/// Derives the game state from the board contents.
pub fn evaluate(board: &Board) -> GameState {
    if let Some(winner) = check_winner(board) {
        GameState::Won(winner)
    } else if is_full(board) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}
