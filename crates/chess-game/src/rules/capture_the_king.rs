//! Capture-the-king rules.

use super::{MovementRule, RuleSet};
use crate::{Board, MoveError};
use chess_core::{Piece, PieceKind, Square};

/// Standard piece movement with a single win condition: take the enemy king.
///
/// Differences from FIDE chess:
/// - No check, checkmate or pins; a move that leaves the own king en prise
///   is legal
/// - No castling, en passant or promotion
/// - Pawns may double-step from their starting rank only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureTheKing;

impl RuleSet for CaptureTheKing {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn check_pattern(
        &self,
        board: &Board,
        piece: Piece,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError> {
        let df = to.file().index() as i8 - from.file().index() as i8;
        let dr = to.rank().index() as i8 - from.rank().index() as i8;
        let illegal = MoveError::IllegalPattern {
            kind: piece.kind,
            from,
            to,
        };

        match MovementRule::for_kind(piece.kind) {
            MovementRule::Pawn => check_pawn(board, piece, from, to, df, dr).ok_or(illegal),
            MovementRule::Step(offsets) => {
                if offsets.contains(&(df, dr)) {
                    Ok(())
                } else {
                    Err(illegal)
                }
            }
            MovementRule::Slide(directions) => {
                let direction = slide_direction(df, dr)
                    .filter(|d| directions.contains(d))
                    .ok_or(illegal)?;
                check_path(board, from, to, direction)
            }
        }
    }

    fn is_winning_capture(&self, captured: Piece) -> bool {
        captured.kind == PieceKind::King
    }
}

/// Returns `Some(())` if the pawn move is a push onto empty squares or a
/// diagonal capture.
fn check_pawn(
    board: &Board,
    pawn: Piece,
    from: Square,
    to: Square,
    df: i8,
    dr: i8,
) -> Option<()> {
    let forward = pawn.color.pawn_direction();
    match (df, dr) {
        (0, r) if r == forward => board.is_empty(to).then_some(()),
        (0, r) if r == 2 * forward => {
            let on_start_rank = from.rank() == pawn.color.pawn_rank();
            let middle = from.offset(0, forward)?;
            (on_start_rank && board.is_empty(middle) && board.is_empty(to)).then_some(())
        }
        (-1 | 1, r) if r == forward => board.is_enemy(to, pawn.color).then_some(()),
        _ => None,
    }
}

/// Returns the unit direction of a straight or diagonal displacement.
fn slide_direction(df: i8, dr: i8) -> Option<(i8, i8)> {
    if (df, dr) == (0, 0) {
        return None;
    }
    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

/// Walks the squares strictly between `from` and `to`.
fn check_path(
    board: &Board,
    from: Square,
    to: Square,
    (df, dr): (i8, i8),
) -> Result<(), MoveError> {
    let mut current = from;
    while let Some(next) = current.offset(df, dr) {
        if next == to {
            return Ok(());
        }
        if !board.is_empty(next) {
            return Err(MoveError::PathBlocked { blocker: next });
        }
        current = next;
    }
    // Unreachable for a valid direction; treat as blocked by the edge.
    Err(MoveError::PathBlocked { blocker: current })
}
