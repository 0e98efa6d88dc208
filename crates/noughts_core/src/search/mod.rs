//! Computer opponent: exhaustive minimax or uniform random play.

mod minimax;

pub use minimax::{Scored, minimax};

use super::game::Game;
use super::types::Move;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// How strongly the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Optimal play via exhaustive search.
    #[default]
    Perfect,
    /// Uniformly random legal moves.
    Easy,
}

/// Picks moves for whichever mark is to move in a game.
///
/// Holds its own random source so that random play can be seeded for
/// reproducible games and tests. Never mutates the game it is given.
#[derive(Debug, Clone)]
pub struct SearchPlayer<R = ChaCha8Rng> {
    rng: R,
}

impl SearchPlayer<ChaCha8Rng> {
    /// Deterministic player seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Player seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: rand::Rng> SearchPlayer<R> {
    /// Creates a player drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Optimal move for the mark currently to move.
    ///
    /// Searches a private copy of the board. Falls back to
    /// [`random_move`](Self::random_move) when the search yields no move,
    /// which only happens at a terminal position; returns `None` when the
    /// board is full.
    #[instrument(skip(self, game), fields(mark = %game.current_mark()))]
    pub fn best_move(&mut self, game: &Game) -> Option<Move> {
        let mut board = *game.board();
        let mark = game.current_mark();
        let Scored { score, best } = minimax(&mut board, mark, mark, 0);
        match best {
            Some(mv) => {
                debug!(%mv, score, "Search chose move");
                Some(mv)
            }
            None => {
                warn!(state = ?game.state(), "Search found no move, falling back to random");
                self.random_move(game)
            }
        }
    }

    /// A uniformly chosen empty cell, or `None` if the board is full.
    #[instrument(skip(self, game))]
    pub fn random_move(&mut self, game: &Game) -> Option<Move> {
        let mv = game.board().empty_cells().choose(&mut self.rng).copied();
        debug!(mv = ?mv, "Random move");
        mv
    }

    /// Move chosen according to `difficulty`.
    pub fn choose_move(&mut self, game: &Game, difficulty: Difficulty) -> Option<Move> {
        match difficulty {
            Difficulty::Perfect => self.best_move(game),
            Difficulty::Easy => self.random_move(game),
        }
    }
}
