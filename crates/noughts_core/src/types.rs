//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A single board cell: empty or holding a mark.
pub type Cell = Option<Mark>;

/// A move as a (row, col) pair, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinates, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the mark at the given move, treating out-of-range as empty.
    pub fn mark_at(&self, mv: Move) -> Cell {
        self.get(mv.row, mv.col).flatten()
    }

    /// Sets a cell. Callers guarantee the coordinates are in range.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row][mv.col] = cell;
    }

    /// Checks if a cell is empty. Out-of-range coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::all()
            .filter(|mv| self.is_empty(mv.row, mv.col))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{r}")?;
            for cell in row {
                write!(f, " {}", cell.map_or('.', Mark::symbol))?;
            }
        }
        Ok(())
    }
}

/// Status of a game, derived from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// No terminal condition reached.
    InProgress,
    /// A winning line exists.
    Won(Mark),
    /// Board full with no winning line.
    Draw,
}

impl GameState {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_row_major() {
        let moves: Vec<_> = Move::all().collect();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[3], Move::new(1, 0));
        assert_eq!(moves[8], Move::new(2, 2));
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(board.is_empty(2, 2));
        assert!(!board.is_empty(3, 0));
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_display_with_indices() {
        let mut board = Board::new();
        board.set(Move::new(0, 0), Some(Mark::X));
        board.set(Move::new(1, 1), Some(Mark::O));
        assert_eq!(board.to_string(), "  0 1 2\n0 X . .\n1 . O .\n2 . . .");
    }
}
