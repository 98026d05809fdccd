//! FEN (Forsyth-Edwards Notation) piece placement parsing and serialization.
//!
//! Only the placement and active-color fields carry meaning in this game.
//! A full six-field FEN is accepted and its remaining fields are ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Piece placement for all 64 squares, indexed by [`Square::index`].
pub type Placement = [Option<Piece>; 64];

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Occupant of each square.
    pub placement: Placement,
    /// Side to move.
    pub active_color: Color,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 2 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let mut color_chars = parts[1].chars();
        let active_color = match (color_chars.next(), color_chars.next()) {
            (Some(c), None) => Color::from_fen_char(c),
            _ => None,
        }
        .ok_or_else(|| FenError::InvalidActiveColor(parts[1].to_string()))?;

        Ok(Fen {
            placement,
            active_color,
        })
    }

    /// Parses the piece placement field (rank 8 first).
    pub fn parse_placement(placement: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut squares: Placement = [None; 64];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::from_coords(file, rank) {
                        squares[sq.index() as usize] = Some(piece);
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
                if file > 8 {
                    break;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }

        Ok(squares)
    }

    /// Serializes a placement to the FEN placement field.
    pub fn placement_to_string(placement: &Placement) -> String {
        let mut fen = String::new();
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match placement[(rank * 8 + file) as usize] {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }

    /// Converts back to a two-field FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            Self::placement_to_string(&self.placement),
            self.active_color.to_fen_char()
        )
    }
}

impl Default for Fen {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = Fen::parse(Fen::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.placement[Square::A1.index() as usize],
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            fen.placement[Square::E8.index() as usize],
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(fen.placement.iter().flatten().count(), 32);
    }

    #[test]
    fn six_field_fen_is_accepted() {
        let fen = Fen::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(fen.active_color, Color::Black);
        assert_eq!(
            fen.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
    }

    #[test]
    fn round_trip_startpos() {
        assert_eq!(Fen::default().to_fen(), Fen::STARTPOS);
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPartCount(1))
        );
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/8 w KQkq"),
            Err(FenError::InvalidPartCount(3))
        );
    }

    #[test]
    fn invalid_active_color() {
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor("x".to_string()))
        );
        assert!(Fen::parse("8/8/8/8/8/8/8/8 wb").is_err());
    }

    #[test]
    fn invalid_placement() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/7 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/9 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/ppppppppp w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/xxxxxxxx w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }
}
