//! Core types for king-capture chess.
//!
//! This crate provides the fundamental value types shared by the game
//! engine and its front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], [`Rank`] and [`Coord`] for board coordinates
//! - [`Move`] for an origin/destination pair
//! - FEN piece-placement parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Coord, File, Rank, Square};
