//! Tests for the tic-tac-toe engine.

use noughts_core::rules::{self, win::LINES};
use noughts_core::{Board, Game, GameState, Mark, Move, PlayError, SearchPlayer};

#[test]
fn test_each_cell_accepts_exactly_one_mark() {
    for mv in Move::all() {
        let mut game = Game::new();
        assert_eq!(game.play(mv.row, mv.col), Ok(()));
        assert_eq!(
            game.play(mv.row, mv.col),
            Err(PlayError::CellOccupied {
                row: mv.row,
                col: mv.col
            })
        );
        assert_eq!(game.board().mark_at(mv), Some(Mark::X));
        assert_eq!(game.history(), &[mv]);
    }
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    let mut game = Game::replay([(1, 1)]).unwrap();
    let before = *game.board();

    for (row, col) in [(3, 0), (0, 3), (3, 3), (10, 1), (usize::MAX, 0), (0, usize::MAX)] {
        assert_eq!(
            game.play(row, col),
            Err(PlayError::InvalidCoordinate { row, col })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_mark(), Mark::O);
    }
}

#[test]
fn test_row_win_scenario() {
    let game = Game::replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
    assert_eq!(game.state(), GameState::Won(Mark::X));
}

#[test]
fn test_diagonal_win_scenario() {
    let game = Game::replay([(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]).unwrap();
    assert_eq!(game.state(), GameState::Won(Mark::X));
}

#[test]
fn test_draw_scenario() {
    let game = Game::replay([
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ])
    .unwrap();
    assert_eq!(game.state(), GameState::Draw);
    assert!(game.board().empty_cells().is_empty());
}

#[test]
fn test_every_line_wins_through_play() {
    for line in LINES {
        let mut others = Move::all()
            .map(|mv| (mv.row, mv.col))
            .filter(|cell| !line.contains(cell));
        let o1 = others.next().unwrap();
        let o2 = others.next().unwrap();

        let game = Game::replay([line[0], o1, line[1], o2, line[2]]).unwrap();
        assert_eq!(game.state(), GameState::Won(Mark::X), "line {line:?}");
    }
}

#[test]
fn test_o_can_win() {
    let game = Game::replay([(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]).unwrap();
    assert_eq!(game.state(), GameState::Won(Mark::O));
    assert_eq!(game.current_mark(), Mark::O);
}

#[test]
fn test_terminal_game_rejects_all_moves() {
    let won = Game::replay([(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
    let drawn = Game::replay([
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ])
    .unwrap();

    for mut game in [won, drawn] {
        let before = game.clone();
        for mv in Move::all() {
            assert_eq!(game.play(mv.row, mv.col), Err(PlayError::GameAlreadyOver));
        }
        assert_eq!(game, before);
    }
}

#[test]
fn test_invariants_hold_over_random_games() {
    for seed in 0..50 {
        let mut player = SearchPlayer::seeded(seed);
        let mut game = Game::new();

        while let Some(mv) = player.random_move(&game) {
            if game.state().is_terminal() {
                break;
            }
            let mover = game.current_mark();
            game.play(mv.row, mv.col).unwrap();

            assert_eq!(game.state(), rules::evaluate(game.board()));
            if game.state() == GameState::InProgress {
                assert_eq!(game.current_mark(), mover.opponent());
            } else {
                assert_eq!(game.current_mark(), mover);
            }
        }

        assert!(game.state().is_terminal(), "seed {seed}");
        let marks = game.history().len();
        assert!((5..=9).contains(&marks));
    }
}

#[test]
fn test_rejected_move_is_not_partially_applied() {
    let mut game = Game::replay([(0, 0)]).unwrap();
    let before = game.clone();
    assert!(game.play(0, 0).is_err());
    assert_eq!(game, before);
    assert_ne!(game.board(), &Board::new());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_errors_display_messages() {
    assert_eq!(
        PlayError::CellOccupied { row: 1, col: 2 }.to_string(),
        "Cell (1,2) is already occupied"
    );
    assert_eq!(PlayError::GameAlreadyOver.to_string(), "Game is already over");
    assert!(PlayError::InvalidCoordinate { row: 3, col: 0 }.is_retryable());
    assert!(!PlayError::GameAlreadyOver.is_retryable());
}

#[test]
fn test_game_state_serializes() {
    let json = serde_json::to_string(&GameState::Won(Mark::O)).unwrap();
    assert_eq!(json, r#"{"Won":"O"}"#);
}
