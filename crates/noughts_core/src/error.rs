//! Errors returned when a move is rejected.

use derive_more::{Display, Error};

/// Reason a call to [`Game::play`](crate::Game::play) was rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// Row or column outside `0..=2`.
    #[display("Row and column must be in 0..2, got ({row}, {col})")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game already reached a win or draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The target cell holds a mark.
    #[display("Cell ({row},{col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl PlayError {
    /// True when the caller may retry with a different move.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, PlayError::GameAlreadyOver)
    }
}
