//! Board square representation.

use std::fmt;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if c >= 'a' && c <= 'h' {
            Self::from_index(c as u8 - b'a')
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if c >= '1' && c <= '8' {
            Self::from_index(c as u8 - b'1')
        } else {
            None
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A raw (file, rank) coordinate pair as supplied by a caller.
///
/// Unlike [`Square`], a `Coord` may lie off the board. It is the input type
/// of move requests, so bounds are checked where moves are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// Returns the square for this coordinate, or `None` if it is off the board.
    #[inline]
    pub const fn to_square(self) -> Option<Square> {
        if self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8 {
            Some(Square((self.rank as u8) * 8 + self.file as u8))
        } else {
            None
        }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((file, rank): (i8, i8)) -> Self {
        Coord { file, rank }
    }
}

impl From<Square> for Coord {
    fn from(sq: Square) -> Self {
        Coord {
            file: sq.file().index() as i8,
            rank: sq.rank().index() as i8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// A `Square` is always on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from zero-based file and rank indices.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4"), case-insensitive.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Returns the square `(file_delta, rank_delta)` away, if it is on the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        Coord::new(
            self.file().index() as i8 + file_delta,
            self.rank().index() as i8 + rank_delta,
        )
        .to_square()
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    // Squares referenced by the starting layout and tests.
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
