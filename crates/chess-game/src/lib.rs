//! Board state and move rules for king-capture chess.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of optional pieces
//! - [`Game`] - board, side to move and status, mutated only by legal moves
//! - [`RuleSet`] - the movement patterns and win condition, implemented by
//!   [`CaptureTheKing`]
//! - [`MoveError`] - why a move was rejected
//!
//! The game follows standard piece movement but has no check, castling, en
//! passant or promotion. It ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use chess_game::{Game, GameStatus, MoveError, MoveOutcome};
//! use chess_core::Color;
//!
//! let mut game = Game::new();
//! let outcome = game.attempt_move((4, 1), (4, 3)).unwrap(); // e2-e4
//! assert_eq!(outcome, MoveOutcome::Continue { captured: None });
//! assert_eq!(game.turn(), Color::Black);
//!
//! // White may not move twice in a row.
//! let err = game.attempt_move((3, 1), (3, 3)).unwrap_err();
//! assert!(matches!(err, MoveError::WrongTurn { .. }));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

mod board;
mod game;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameState, MoveError, MoveOutcome, PlayedMove};
pub use rules::{CaptureTheKing, GameStatus, MovementRule, RuleSet};
