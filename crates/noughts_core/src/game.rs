//! Game logic and rules for tic-tac-toe.

use super::error::PlayError;
use super::rules;
use super::types::{Board, GameState, Mark, Move, SIZE};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// X moves first. The state is recomputed from the board after every
/// successful move; once it is terminal, every further move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current: Mark,
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays a sequence of (row, col) moves from the initial position.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves))]
    pub fn replay<I>(moves: I) -> Result<Self, PlayError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut game = Self::new();
        for (row, col) in moves {
            game.play(row, col)?;
        }
        Ok(game)
    }

    /// The mark whose turn it is.
    ///
    /// After the game ends this stays on the mark that made the last move.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`PlayError::InvalidCoordinate`] if either index is outside `0..=2`
    /// - [`PlayError::GameAlreadyOver`] if the game is won or drawn
    /// - [`PlayError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), PlayError> {
        if row >= SIZE || col >= SIZE {
            return Err(PlayError::InvalidCoordinate { row, col });
        }
        if self.state.is_terminal() {
            return Err(PlayError::GameAlreadyOver);
        }
        if !self.board.is_empty(row, col) {
            return Err(PlayError::CellOccupied { row, col });
        }

        let mv = Move::new(row, col);
        self.board.set(mv, Some(self.current));
        self.history.push(mv);
        self.state = rules::evaluate(&self.board);

        // Turn only advances while the game continues
        if self.state == GameState::InProgress {
            self.current = self.current.opponent();
        }

        debug!(%mv, state = ?self.state, "Move applied");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
