//! Board state: which piece, if any, stands on each square.

use chess_core::{Color, Fen, FenError, Piece, PieceKind, Placement, Rank, Square};
use std::fmt;

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// The board applies no chess rules; it only stores pieces. Rule checks
/// live in [`crate::rules`] and [`crate::Game`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting layout.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                if let Some(sq) = Square::from_coords(file, color.back_rank().index()) {
                    board.place(sq, Piece::new(color, kind));
                }
                if let Some(sq) = Square::from_coords(file, color.pawn_rank().index()) {
                    board.place(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board
    }

    /// Creates a board from a FEN piece-placement field.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        Ok(Board {
            squares: Fen::parse_placement(placement)?,
        })
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_placement(&self) -> String {
        Fen::placement_to_string(&self.squares)
    }

    pub(crate) fn placement(&self) -> &Placement {
        &self.squares
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Puts a piece on a square, replacing any occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index() as usize] = Some(piece);
    }

    /// Empties a square, returning whatever stood there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Moves the occupant of `from` to `to`, leaving `from` empty.
    ///
    /// Anything standing on `to` is destroyed. Moving from an empty square
    /// empties `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.clear(from);
        self.squares[to.index() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_friendly(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Returns true if `sq` holds a piece of the opponent of `color`.
    #[inline]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color != color)
    }

    /// Iterates over occupied squares from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the square of `color`'s king, if it is still on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.is_king())
            .map(|(sq, _)| sq)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Returns the pieces of one rank, a-file first.
    pub fn rank(&self, rank: Rank) -> [Option<Piece>; 8] {
        let start = rank.index() as usize * 8;
        let mut row = [None; 8];
        row.copy_from_slice(&self.squares[start..start + 8]);
        row
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::File;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn initial_layout_matches_standard_chess() {
        let board = Board::initial();
        assert_eq!(
            board.to_placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(board.count(), 32);
        assert_eq!(
            board.piece_at(Square::A1),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn initial_layout_every_square() {
        let board = Board::initial();
        for sq in Square::all() {
            let expected = match sq.rank() {
                Rank::R1 => Some(Piece::new(
                    Color::White,
                    PieceKind::BACK_RANK[sq.file().index() as usize],
                )),
                Rank::R2 => Some(Piece::new(Color::White, PieceKind::Pawn)),
                Rank::R7 => Some(Piece::new(Color::Black, PieceKind::Pawn)),
                Rank::R8 => Some(Piece::new(
                    Color::Black,
                    PieceKind::BACK_RANK[sq.file().index() as usize],
                )),
                _ => None,
            };
            assert_eq!(board.piece_at(sq), expected, "square {}", sq);
        }
    }

    #[test]
    fn place_overwrites_and_clear_returns() {
        let mut board = Board::empty();
        let e4 = Square::new(File::E, Rank::R4);
        board.place(e4, Piece::new(Color::White, PieceKind::Knight));
        board.place(e4, Piece::new(Color::Black, PieceKind::Rook));
        assert_eq!(
            board.piece_at(e4),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            board.clear(e4),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert!(board.is_empty(e4));
        assert_eq!(board.clear(e4), None);
    }

    #[test]
    fn move_piece_destroys_occupant() {
        let mut board = Board::initial();
        board.move_piece(sq("d1"), sq("d7"));
        assert!(board.is_empty(sq("d1")));
        assert_eq!(
            board.piece_at(sq("d7")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn friendly_and_enemy() {
        let board = Board::initial();
        assert!(board.is_friendly(sq("a2"), Color::White));
        assert!(board.is_enemy(sq("a7"), Color::White));
        assert!(!board.is_friendly(sq("a4"), Color::White));
        assert!(!board.is_enemy(sq("a4"), Color::White));
    }

    #[test]
    fn find_king() {
        let mut board = Board::initial();
        assert_eq!(board.find_king(Color::White), Some(Square::E1));
        assert_eq!(board.find_king(Color::Black), Some(Square::E8));
        board.clear(Square::E8);
        assert_eq!(board.find_king(Color::Black), None);
    }

    #[test]
    fn placement_round_trip() {
        let placement = "4k3/8/8/3q4/8/8/8/R3K3";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.to_placement(), placement);
        assert_eq!(board.count(), 4);
        assert!(Board::from_placement("4k3/8").is_err());
    }

    #[test]
    fn rank_row() {
        let board = Board::initial();
        let row = board.rank(Rank::R1);
        assert_eq!(row[4], Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board.rank(Rank::R4), [None; 8]);
    }
}
