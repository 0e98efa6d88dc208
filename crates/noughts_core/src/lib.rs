//! Noughts core - tic-tac-toe engine and computer opponent
//!
//! Pure game logic with no I/O. A driver creates a [`Game`], asks a human or
//! a [`SearchPlayer`] for a move, submits it with [`Game::play`] and inspects
//! [`Game::state`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameState, Move, SearchPlayer};
//!
//! let mut game = Game::new();
//! let mut computer = SearchPlayer::seeded(42);
//!
//! while game.state() == GameState::InProgress {
//!     let Move { row, col } = computer.best_move(&game).expect("board has room");
//!     game.play(row, col).expect("search only returns legal moves");
//! }
//!
//! // Perfect play on both sides always draws
//! assert_eq!(game.state(), GameState::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
pub mod search;
mod types;

pub use error::PlayError;
pub use game::Game;
pub use search::{Difficulty, SearchPlayer};
pub use types::{Board, Cell, GameState, Mark, Move, SIZE};
