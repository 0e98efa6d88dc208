//! Draw detection logic for tic-tac-toe.

use super::super::types::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(Option::is_some)
}
