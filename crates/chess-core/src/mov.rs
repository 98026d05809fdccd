//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one square to another.
///
/// There are no special move kinds in this game (no castling, en passant or
/// promotion), so a move is fully described by its two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parses coordinate notation such as `e2e4`.
    pub fn from_coordinate(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Returns the move in coordinate notation.
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
