//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;

/// A candidate move: origin, destination and the kind of piece moving.
///
/// Moves are pseudo-legal. Nothing records captures, promotions or whether
/// the mover's king is left in check.
///
/// Encoded compactly: 6 bits from, 6 bits to, 3 bits piece kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: PieceKind) -> Self {
        let encoded = (from.index() as u16) | ((to.index() as u16) << 6) | ((kind as u16) << 12);
        Move(encoded)
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_bit((self.0 & 0x3F) as u32)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_bit(((self.0 >> 6) & 0x3F) as u32)
    }

    /// Returns the kind of piece being moved.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match (self.0 >> 12) & 0x7 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Returns coordinate notation for this move (e.g., "g1f3").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.kind(), self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
