//! Bitboard view of a board.

use movegen_core::{Board, Color, Piece, PieceKind, Snapshot, Square};

use crate::Bitboard;

/// Per-kind, per-color bitboards rebuilt from a board or a state string.
///
/// King placement is also kept as a square per color. `None` means that
/// side has no king; it cannot be confused with a king on a1. When a side
/// has more than one king, the lowest square is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceBoards {
    /// Bitboards indexed by [`Color::index`] then [`PieceKind::index`].
    pieces: [[Bitboard; 6]; 2],

    /// King square per color.
    kings: [Option<Square>; 2],
}

impl PieceBoards {
    /// Creates a view with no pieces.
    pub const fn empty() -> Self {
        PieceBoards {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            kings: [None; 2],
        }
    }

    /// Scans the 64 squares of a board once.
    pub fn from_board(board: &Board) -> Self {
        Self::from_pieces(board.pieces())
    }

    /// Scans a state string once.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::from_pieces(snapshot.pieces())
    }

    fn from_pieces(pieces: impl Iterator<Item = (Square, Piece)>) -> Self {
        let mut view = Self::empty();
        for (sq, piece) in pieces {
            view.pieces[piece.color.index()][piece.kind.index()].set(sq);
            if piece.kind == PieceKind::King && view.kings[piece.color.index()].is_none() {
                view.kings[piece.color.index()] = Some(sq);
            }
        }
        view
    }

    /// Returns a bitboard of pieces of the given kind and color.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Returns the king square for a color, if that side has a king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Returns a bitboard of every square holding a piece of `color`.
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }
}

impl Default for PieceBoards {
    fn default() -> Self {
        Self::empty()
    }
}
