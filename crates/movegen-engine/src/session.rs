//! Host-facing session: board, turn and the current move list.
//!
//! The host framework drives a [`Session`] from its UI callbacks. The move
//! list is regenerated whenever the board or the side to move changes, and
//! both legality queries are answered from that list.

use crate::config::{ConfigError, SessionConfig};
use crate::movegen::{MoveGenerator, MoveList};
use crate::Bitboard;
use movegen_core::{Board, BoardError, Color, Piece, Snapshot, Square};
use thiserror::Error;

/// Errors raised by session mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the origin square belongs to the side not on move.
    #[error("{color} piece on {square} cannot move on the other side's turn")]
    WrongSide { square: Square, color: Color },
    /// The move is not among the generated moves.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },
}

/// A game session.
#[derive(Debug, Clone)]
pub struct Session {
    generator: MoveGenerator,
    board: Board,
    initial: Snapshot,
    side_to_move: Color,
    moves: MoveList,
}

impl Session {
    /// Sets up a session from configuration.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        let description = config.parser().parse(&config.start_position)?;
        Ok(Self::from_board(description.board, config.first_to_move))
    }

    /// Sets up a session on the given board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut session = Session {
            generator: MoveGenerator::new(),
            initial: board.snapshot(),
            board,
            side_to_move,
            moves: MoveList::new(),
        };
        session.refresh();
        tracing::debug!(
            pieces = session.board.piece_count(),
            %side_to_move,
            "session started"
        );
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the moves generated for the side to move.
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Returns the state string of the board the session started from.
    pub fn initial_state_string(&self) -> &Snapshot {
        &self.initial
    }

    /// Returns the state string of the current board.
    pub fn state_string(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Replaces the whole board from a state string. On error the board is
    /// left unchanged.
    pub fn set_state_string(&mut self, s: &str) -> Result<(), BoardError> {
        self.board = Board::from_snapshot(s)?;
        self.refresh();
        Ok(())
    }

    /// Places or removes a single piece.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = self.board.set(sq, piece);
        self.refresh();
        previous
    }

    /// Sets the side to move.
    pub fn set_side_to_move(&mut self, side: Color) {
        self.side_to_move = side;
        self.refresh();
    }

    /// Hands the move to the other side.
    pub fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        tracing::debug!(side = %self.side_to_move, "turn changed");
        self.refresh();
    }

    /// Returns true if the piece on `from` belongs to the side to move and
    /// has at least one move.
    pub fn can_move_from(&self, from: Square) -> bool {
        self.board
            .get(from)
            .is_some_and(|p| p.color == self.side_to_move)
            && self.moves.can_move_from(from)
    }

    /// Returns true if moving from `from` to `to` is a generated move.
    pub fn can_move_from_to(&self, from: Square, to: Square) -> bool {
        self.moves.can_move(from, to)
    }

    /// Returns the squares to highlight for the piece on `from`.
    pub fn highlights(&self, from: Square) -> Bitboard {
        self.moves.targets_from(from)
    }

    /// Moves a piece, capturing whatever stands on `to`, and ends the turn.
    /// Returns the captured piece.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, SessionError> {
        let piece = self.board.get(from).ok_or(SessionError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(SessionError::WrongSide {
                square: from,
                color: piece.color,
            });
        }
        if !self.moves.can_move(from, to) {
            return Err(SessionError::IllegalMove { from, to });
        }

        self.board.set(from, None);
        let captured = self.board.set(to, Some(piece));
        tracing::debug!(%from, %to, piece = %piece, captured = captured.is_some(), "move applied");

        self.end_turn();
        Ok(captured)
    }

    /// Removes every piece from the board.
    pub fn stop(&mut self) {
        self.board.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.moves = self.generator.generate(&self.board, self.side_to_move);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }
}
