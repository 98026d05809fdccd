//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, which holds the piece
//! movement patterns and the win condition. [`crate::Game`] performs the
//! turn and occupancy checks and delegates the rest to the active rule set.

mod capture_the_king;

pub use capture_the_king::CaptureTheKing;

use crate::{Board, MoveError};
use chess_core::{Color, Piece, PieceKind, Square};

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The given color captured the enemy king. Terminal.
    Won(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(color) => Some(color),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(color) => write!(f, "{} won", color),
        }
    }
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementRule {
    /// Forward pushes onto empty squares, diagonal-forward captures.
    Pawn,
    /// Exactly one of the listed (file, rank) offsets; intervening squares
    /// are ignored.
    Step(&'static [(i8, i8)]),
    /// Any positive multiple of one of the listed directions, through
    /// empty squares only.
    Slide(&'static [(i8, i8)]),
}

impl MovementRule {
    /// Returns the movement rule for a piece kind.
    pub const fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => MovementRule::Pawn,
            PieceKind::Knight => MovementRule::Step(&KNIGHT_JUMPS),
            PieceKind::Bishop => MovementRule::Slide(&DIAGONAL),
            PieceKind::Rook => MovementRule::Slide(&ORTHOGONAL),
            PieceKind::Queen => MovementRule::Slide(&ALL_DIRECTIONS),
            PieceKind::King => MovementRule::Step(&ALL_DIRECTIONS),
        }
    }
}

/// Trait for the piece-movement and win rules of a game.
///
/// Implementations judge geometry and occupancy only. Whose turn it is,
/// bounds, empty origins and self-captures are checked by [`crate::Game`]
/// before the rule set is consulted.
///
/// # Example
///
/// ```
/// use chess_core::Square;
/// use chess_game::{CaptureTheKing, RuleSet};
///
/// let board = CaptureTheKing.initial_board();
/// let b1 = Square::from_algebraic("b1").unwrap();
/// let c3 = Square::from_algebraic("c3").unwrap();
/// let knight = board.piece_at(b1).unwrap();
/// assert!(CaptureTheKing.check_pattern(&board, knight, b1, c3).is_ok());
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Checks that moving `piece` from `from` to `to` matches its movement
    /// pattern and that nothing blocks its path.
    ///
    /// Returns [`MoveError::IllegalPattern`] or [`MoveError::PathBlocked`].
    /// The caller guarantees `to` does not hold a piece of `piece.color`.
    fn check_pattern(
        &self,
        board: &Board,
        piece: Piece,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError>;

    /// Returns true if capturing `captured` ends the game in the mover's favor.
    fn is_winning_capture(&self, captured: Piece) -> bool;
}
