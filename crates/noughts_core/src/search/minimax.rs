//! Exhaustive minimax over a private board copy.

use super::super::rules::{check_winner, is_full};
use super::super::types::{Board, Mark, Move};

/// Score for a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// A scored position, with the move that achieves it when one was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Score from the optimizing mark's point of view.
    pub score: i32,
    /// Move chosen at this node, `None` at terminal positions.
    pub best: Option<Move>,
}

/// Scores `board` with `turn` to move, for the `maximizing` mark.
///
/// Wins score `10 - depth` and losses `depth - 10`, so faster wins and
/// slower losses are preferred. Candidates are scanned in row-major order and
/// only a strictly better score replaces the kept move. The board is mutated
/// during the walk and restored before returning.
pub fn minimax(board: &mut Board, turn: Mark, maximizing: Mark, depth: i32) -> Scored {
    if let Some(winner) = check_winner(board) {
        let score = if winner == maximizing {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
        return Scored { score, best: None };
    }
    if is_full(board) {
        return Scored {
            score: 0,
            best: None,
        };
    }

    let maximize = turn == maximizing;
    let mut kept = Scored {
        score: if maximize { i32::MIN } else { i32::MAX },
        best: None,
    };

    for mv in board.empty_cells() {
        board.set(mv, Some(turn));
        let Scored { score, .. } = minimax(board, turn.opponent(), maximizing, depth + 1);
        board.set(mv, None);

        let better = if maximize {
            score > kept.score
        } else {
            score < kept.score
        };
        if better {
            kept = Scored {
                score,
                best: Some(mv),
            };
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        let mut board = Board::new();
        let result = minimax(&mut board, Mark::X, Mark::X, 0);
        assert_eq!(result.score, 0);
        // Every opening draws, so the first scanned cell is kept
        assert_eq!(result.best, Some(Move::new(0, 0)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_positions_have_no_move() {
        let game = Game::replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
        let mut board = *game.board();
        assert_eq!(
            minimax(&mut board, Mark::O, Mark::X, 0),
            Scored {
                score: 10,
                best: None
            }
        );
        assert_eq!(
            minimax(&mut board, Mark::O, Mark::O, 3),
            Scored {
                score: -7,
                best: None
            }
        );
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win now at (0,2) or later; immediate win scores 9
        let game = Game::replay([(0, 0), (1, 1), (0, 1), (2, 2)]).unwrap();
        let mut board = *game.board();
        let result = minimax(&mut board, Mark::X, Mark::X, 0);
        assert_eq!(result.score, 9);
        assert_eq!(result.best, Some(Move::new(0, 2)));
    }
}
