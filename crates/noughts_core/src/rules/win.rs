//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Mark, Move};

/// The eight winning lines: rows, then columns, then the two diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills any line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.mark_at(Move::from(a))?;
        (board.mark_at(Move::from(b)) == Some(mark) && board.mark_at(Move::from(c)) == Some(mark))
            .then_some(mark)
    })
}
