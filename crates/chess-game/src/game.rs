//! Game state and move application.
//!
//! The [`Game`] struct owns the board, the side to move and the game
//! status. [`Game::attempt_move`] is the single entry point that mutates
//! it: a move is either applied in full or rejected with a [`MoveError`]
//! and no change at all.

use crate::rules::{CaptureTheKing, GameStatus, RuleSet};
use crate::Board;
use chess_core::{Color, Coord, Fen, FenError, Move, Piece, PieceKind, Square};
use thiserror::Error;

/// Reasons a move is rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[error("game is over: {winner} has already won")]
    GameOver { winner: Color },
    /// Origin or destination lies off the board.
    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),
    /// No piece stands on the origin square.
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),
    /// The piece on the origin belongs to the side not to move.
    #[error("it is {expected}'s turn, but the piece belongs to {found}")]
    WrongTurn { expected: Color, found: Color },
    /// The destination holds a piece of the mover's own color.
    #[error("{0} is occupied by one of your own pieces")]
    SelfCapture(Square),
    /// The move does not match the piece's movement rule.
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalPattern {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    /// A sliding piece would pass over an occupied square.
    #[error("the path is blocked by the piece on {blocker}")]
    PathBlocked { blocker: Square },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the other side is now to move.
    Continue { captured: Option<Piece> },
    /// The move captured the enemy king; the game is over.
    Won { winner: Color, captured: Piece },
}

impl MoveOutcome {
    /// Returns the piece removed by the move, if any.
    pub const fn captured(self) -> Option<Piece> {
        match self {
            MoveOutcome::Continue { captured } => captured,
            MoveOutcome::Won { captured, .. } => Some(captured),
        }
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece it captured, if any.
    pub captured: Option<Piece>,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy)]
pub struct GameState<'a> {
    pub board: &'a Board,
    pub turn: Color,
    pub status: GameStatus,
}

/// A king-capture chess game.
///
/// Created with the standard layout, White to move. The game ends as soon
/// as either king is captured; every later move is rejected with
/// [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_board(CaptureTheKing.initial_board(), Color::White)
    }

    /// Creates a game from an arbitrary board and side to move.
    ///
    /// The status starts as in progress even if a king is missing; a side
    /// without a king simply cannot be beaten.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a game from a FEN string (`<placement> <w|b>`, or full FEN).
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some(piece) = parsed.placement[sq.index() as usize] {
                board.place(sq, piece);
            }
        }
        Ok(Self::from_board(board, parsed.active_color))
    }

    /// Returns the position as a two-field FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            placement: *self.board.placement(),
            active_color: self.turn,
        }
        .to_fen()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if a king has been captured.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// Returns a read-only view of board, turn and status.
    pub fn state(&self) -> GameState<'_> {
        GameState {
            board: &self.board,
            turn: self.turn,
            status: self.status,
        }
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Validates a move and, if legal, applies it.
    ///
    /// Checks run in this order, the first failure being reported:
    /// game not over, origin on the board, destination on the board, origin
    /// occupied, occupant belongs to the side to move, destination not
    /// friendly, movement pattern, clear path. A rejected move leaves the
    /// game unchanged.
    pub fn attempt_move(
        &mut self,
        origin: impl Into<Coord>,
        destination: impl Into<Coord>,
    ) -> Result<MoveOutcome, MoveError> {
        let (origin, destination) = (origin.into(), destination.into());
        match self.validate(origin, destination) {
            Ok((m, piece)) => Ok(self.apply(m, piece)),
            Err(e) => {
                tracing::trace!(%origin, %destination, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    /// Plays a move between two on-board squares.
    pub fn play(&mut self, m: Move) -> Result<MoveOutcome, MoveError> {
        self.attempt_move(m.from(), m.to())
    }

    /// Returns every square the piece on `from` may move to right now.
    ///
    /// Empty if `from` is empty, holds a piece of the side not to move, or
    /// the game is over.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.validate(from.into(), to.into()).is_ok())
            .collect()
    }

    /// Returns every move the side to move may make.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == self.turn)
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    fn validate(&self, origin: Coord, destination: Coord) -> Result<(Move, Piece), MoveError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(MoveError::GameOver { winner });
        }
        let from = origin
            .to_square()
            .ok_or(MoveError::OutOfBounds(origin))?;
        let to = destination
            .to_square()
            .ok_or(MoveError::OutOfBounds(destination))?;
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                found: piece.color,
            });
        }
        if self.board.is_friendly(to, piece.color) {
            return Err(MoveError::SelfCapture(to));
        }
        CaptureTheKing.check_pattern(&self.board, piece, from, to)?;
        Ok((Move::new(from, to), piece))
    }

    /// Applies a validated move.
    fn apply(&mut self, m: Move, piece: Piece) -> MoveOutcome {
        let captured = self.board.piece_at(m.to());
        let winning = captured.filter(|&c| CaptureTheKing.is_winning_capture(c));

        self.board.move_piece(m.from(), m.to());
        self.history.push(PlayedMove {
            mov: m,
            piece,
            captured,
        });

        match winning {
            Some(king) => {
                let winner = self.turn;
                self.status = GameStatus::Won(winner);
                tracing::info!(%winner, mov = %m, "king captured");
                MoveOutcome::Won {
                    winner,
                    captured: king,
                }
            }
            None => {
                tracing::debug!(%piece, mov = %m, ?captured, "move applied");
                self.turn = self.turn.opposite();
                MoveOutcome::Continue { captured }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.to_fen(), Fen::STARTPOS);
    }

    #[test]
    fn double_step_flips_turn() {
        let mut game = Game::new();
        let outcome = game.attempt_move((4, 1), (4, 3)).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue { captured: None });
        assert_eq!(game.turn(), Color::Black);
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(
            game.board().piece_at(sq("e4")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(game.history()[0].mov, Move::new(sq("e2"), sq("e4")));
    }

    #[test]
    fn game_over_is_checked_first() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K2Q w").unwrap();
        game.attempt_move((7, 0), (4, 3)).unwrap();
        game.attempt_move((4, 7), (4, 6)).unwrap();
        let outcome = game.attempt_move((4, 3), (4, 6)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                winner: Color::White,
                captured: Piece::new(Color::Black, PieceKind::King)
            }
        );
        assert_eq!(
            game.attempt_move((-1, 0), (0, 0)),
            Err(MoveError::GameOver {
                winner: Color::White
            })
        );
    }

    #[test]
    fn out_of_bounds_origin_before_destination() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move((8, 0), (9, 9)),
            Err(MoveError::OutOfBounds(Coord::new(8, 0)))
        );
        assert_eq!(
            game.attempt_move((0, 0), (0, -1)),
            Err(MoveError::OutOfBounds(Coord::new(0, -1)))
        );
    }

    #[test]
    fn empty_origin() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move((4, 3), (4, 4)),
            Err(MoveError::EmptyOrigin(sq("e4")))
        );
    }

    #[test]
    fn self_capture_includes_null_move() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move((0, 0), (0, 1)),
            Err(MoveError::SelfCapture(sq("a2")))
        );
        assert_eq!(
            game.attempt_move((1, 0), (1, 0)),
            Err(MoveError::SelfCapture(sq("b1")))
        );
    }

    #[test]
    fn legal_destinations_from_start() {
        let game = Game::new();
        assert_eq!(
            game.legal_destinations(sq("b1")),
            vec![sq("a3"), sq("c3")]
        );
        assert_eq!(game.legal_destinations(sq("e2")), vec![sq("e3"), sq("e4")]);
        assert!(game.legal_destinations(sq("a1")).is_empty());
        assert!(game.legal_destinations(sq("e7")).is_empty());
        assert!(game.legal_destinations(sq("e4")).is_empty());
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = Game::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
        let outcome = game.play(Move::new(sq("e4"), sq("d5"))).unwrap();
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(outcome.captured(), Some(pawn));
        assert_eq!(game.history()[0].captured, Some(pawn));
        assert_eq!(game.board().count(), 3);
    }

    #[test]
    fn state_view() {
        let game = Game::new();
        let state = game.state();
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.board, game.board());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            MoveError::WrongTurn {
                expected: Color::Black,
                found: Color::White
            }
            .to_string(),
            "it is Black's turn, but the piece belongs to White"
        );
        assert_eq!(
            MoveError::IllegalPattern {
                kind: PieceKind::Knight,
                from: sq("b1"),
                to: sq("b3")
            }
            .to_string(),
            "a Knight cannot move from b1 to b3"
        );
        assert_eq!(
            MoveError::OutOfBounds(Coord::new(8, -1)).to_string(),
            "coordinate (8, -1) is off the board"
        );
    }
}
