//! Player input parsing.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors from parsing a line of player input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square '{0}': use a file a-h and a rank 1-8, like e2")]
    InvalidSquare(String),
    #[error("invalid move '{0}': give two squares, like e2e4")]
    InvalidMove(String),
    #[error("'moves' needs a square, like 'moves e2'")]
    MissingSquare,
    #[error("a move from {0} needs a destination square")]
    MissingDestination(String),
    #[error("unexpected input '{0}'")]
    TrailingInput(String),
    #[error("unknown command '{0}': enter a move like 'a2 a4' or type 'help'")]
    UnknownCommand(String),
}

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a piece, e.g. `a2 a4` or `e2e4`.
    Move(Move),
    /// List the squares the piece on a square may move to.
    Moves(Square),
    /// Redraw the board.
    Board,
    /// List the moves played so far.
    History,
    Help,
    Quit,
}

impl Command {
    /// Parses one line of input. Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim().to_ascii_lowercase();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let (cmd, rest) = match parts.split_first() {
            Some((cmd, rest)) => (*cmd, rest),
            None => return Err(ParseError::UnknownCommand(String::new())),
        };

        let command = match cmd {
            "quit" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            "board" => Command::Board,
            "history" => Command::History,
            "moves" => {
                let target = rest.first().ok_or(ParseError::MissingSquare)?;
                return expect_end(&rest[1..], Command::Moves(parse_square(target)?));
            }
            _ if rest.is_empty() && cmd.len() == 4 && starts_with_square(cmd) => {
                let m = Move::from_coordinate(cmd)
                    .ok_or_else(|| ParseError::InvalidMove(cmd.to_string()))?;
                Command::Move(m)
            }
            _ if looks_like_square(cmd) => {
                let to = rest
                    .first()
                    .ok_or_else(|| ParseError::MissingDestination(cmd.to_string()))?;
                let m = Move::new(parse_square(cmd)?, parse_square(to)?);
                return expect_end(&rest[1..], Command::Move(m));
            }
            _ => return Err(ParseError::UnknownCommand(cmd.to_string())),
        };

        expect_end(rest, command)
    }
}

fn parse_square(s: &str) -> Result<Square, ParseError> {
    Square::from_algebraic(s).ok_or_else(|| ParseError::InvalidSquare(s.to_string()))
}

/// True if `s` opens with a file letter and a digit, as in `e2e4`.
fn starts_with_square(s: &str) -> bool {
    matches!(s.as_bytes(), [b'a'..=b'h', b'0'..=b'9', ..])
}

fn looks_like_square(s: &str) -> bool {
    s.len() == 2 && s.as_bytes()[0].is_ascii_alphabetic()
}

fn expect_end(rest: &[&str], command: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::TrailingInput(rest.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn parse_two_square_move() {
        assert_eq!(
            Command::parse("a2 a4"),
            Ok(Command::Move(Move::new(sq("a2"), sq("a4"))))
        );
        assert_eq!(
            Command::parse("  E2   E4 \n"),
            Ok(Command::Move(Move::new(sq("e2"), sq("e4"))))
        );
    }

    #[test]
    fn parse_compact_move() {
        assert_eq!(
            Command::parse("g1f3"),
            Ok(Command::Move(Move::new(sq("g1"), sq("f3"))))
        );
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Quit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("board"), Ok(Command::Board));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("moves b1"), Ok(Command::Moves(sq("b1"))));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("a2 a9"),
            Err(ParseError::InvalidSquare("a9".to_string()))
        );
        assert_eq!(
            Command::parse("e2e9"),
            Err(ParseError::InvalidMove("e2e9".to_string()))
        );
        assert_eq!(
            Command::parse("a9a4"),
            Err(ParseError::InvalidMove("a9a4".to_string()))
        );
        assert_eq!(
            Command::parse("a2"),
            Err(ParseError::MissingDestination("a2".to_string()))
        );
        assert_eq!(Command::parse("moves"), Err(ParseError::MissingSquare));
        assert_eq!(
            Command::parse("a2 a4 a5"),
            Err(ParseError::TrailingInput("a5".to_string()))
        );
        assert_eq!(
            Command::parse("quit now"),
            Err(ParseError::TrailingInput("now".to_string()))
        );
        assert_eq!(
            Command::parse("castle"),
            Err(ParseError::UnknownCommand("castle".to_string()))
        );
    }

    #[test]
    fn four_letter_words_are_unknown_commands() {
        for word in ["undo", "draw", "i2i4", "éé"] {
            assert_eq!(
                Command::parse(word),
                Err(ParseError::UnknownCommand(word.to_string())),
                "{word}"
            );
        }
    }
}
