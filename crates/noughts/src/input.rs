//! Parsing of lines typed at the terminal.

use crate::config::PlayerKind;
use derive_more::{Display, Error};
use noughts_core::{Move, SIZE};

/// A move token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}', expected 'row,col' with values in 0..2", token)]
pub struct InputError {
    /// The offending token.
    #[error(not(source))]
    pub token: String,
}

/// Parses "row col" or "row,col" with both values in `0..=2`.
pub fn parse_move(input: &str) -> Option<Move> {
    let mut tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let row = tokens.next()?.parse::<usize>().ok()?;
    let col = tokens.next()?.parse::<usize>().ok()?;
    if tokens.next().is_some() || row >= SIZE || col >= SIZE {
        return None;
    }
    Some(Move::new(row, col))
}

/// Parses a whitespace-separated list of "row,col" moves.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, InputError> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .contains(',')
                .then(|| parse_move(token))
                .flatten()
                .ok_or_else(|| InputError {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// True when the line asks to quit.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

/// Interprets an answer to the player type prompt; empty means human.
pub fn parse_kind(input: &str) -> Option<PlayerKind> {
    let input = input.trim();
    if input.is_empty() {
        return Some(PlayerKind::Human);
    }
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_separators() {
        assert_eq!(parse_move("1 2"), Some(Move::new(1, 2)));
        assert_eq!(parse_move("1,2"), Some(Move::new(1, 2)));
        assert_eq!(parse_move("  0 ,  2 "), Some(Move::new(0, 2)));
        assert_eq!(parse_move("2\t0"), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_parse_move_rejects_bad_input() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("3 0"), None);
        assert_eq!(parse_move("-1 0"), None);
        assert_eq!(parse_move("a b"), None);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_moves("0,0 1,1  2,2").unwrap(),
            vec![Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)]
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert_eq!(
            parse_moves("0,0 11").unwrap_err(),
            InputError {
                token: "11".to_string()
            }
        );
        assert!(parse_moves("0,3").is_err());
    }

    #[test]
    fn test_quit_and_kind() {
        assert!(is_quit("q"));
        assert!(is_quit(" Q "));
        assert!(!is_quit("quit"));

        assert_eq!(parse_kind(""), Some(PlayerKind::Human));
        assert_eq!(parse_kind("c"), Some(PlayerKind::Computer));
        assert_eq!(parse_kind("HUMAN"), Some(PlayerKind::Human));
        assert_eq!(parse_kind("x"), None);
    }
}
