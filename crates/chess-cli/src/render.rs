//! Text rendering of the board.

use crate::config::DisplayConfig;
use chess_core::{Color, File, Piece, PieceKind, Rank};
use chess_game::{GameState, GameStatus};

/// Returns the Unicode chess symbol for a piece.
pub const fn unicode_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '\u{2654}',
        (Color::White, PieceKind::Queen) => '\u{2655}',
        (Color::White, PieceKind::Rook) => '\u{2656}',
        (Color::White, PieceKind::Bishop) => '\u{2657}',
        (Color::White, PieceKind::Knight) => '\u{2658}',
        (Color::White, PieceKind::Pawn) => '\u{2659}',
        (Color::Black, PieceKind::King) => '\u{265A}',
        (Color::Black, PieceKind::Queen) => '\u{265B}',
        (Color::Black, PieceKind::Rook) => '\u{265C}',
        (Color::Black, PieceKind::Bishop) => '\u{265D}',
        (Color::Black, PieceKind::Knight) => '\u{265E}',
        (Color::Black, PieceKind::Pawn) => '\u{265F}',
    }
}

fn glyph(piece: Option<Piece>, display: &DisplayConfig) -> char {
    match piece {
        Some(p) if display.unicode => unicode_glyph(p),
        Some(p) => p.to_fen_char(),
        None => '.',
    }
}

fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::R8 => "Black Home Rank",
        Rank::R1 => "White Home Rank",
        _ => "",
    }
}

/// Returns the status line shown under the board.
pub fn status_line(state: &GameState<'_>) -> String {
    match state.status {
        GameStatus::InProgress => format!("{} to move", state.turn),
        GameStatus::Won(winner) => format!(
            "{} wins by capturing the {} king!",
            winner,
            winner.opposite()
        ),
    }
}

/// Draws the board with rank 8 at the top, followed by the status line.
pub fn render(state: &GameState<'_>, display: &DisplayConfig) -> String {
    let header = format!(
        "   {}",
        File::ALL
            .iter()
            .map(|f| f.to_char().to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let mut lines = vec![header.clone()];
    for rank in Rank::ALL.into_iter().rev() {
        let row: Vec<String> = state
            .board
            .rank(rank)
            .iter()
            .map(|&p| glyph(p, display).to_string())
            .collect();
        let mut line = format!("{}| {} |", rank, row.join(" "));
        let label = rank_label(rank);
        if display.rank_labels && !label.is_empty() {
            line.push(' ');
            line.push_str(label);
        }
        lines.push(line);
    }
    lines.push(header);
    lines.push(status_line(state));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
