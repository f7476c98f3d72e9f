//! Attack tables for the leaping pieces.
//!
//! Knight and king reach depends only on the square they stand on, so both
//! are computed once for all 64 squares and looked up afterwards.

use crate::Bitboard;
use movegen_core::Square;

/// Knight steps as (file delta, rank delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King steps as (file delta, rank delta).
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Precomputed reach for knights and kings, ignoring occupancy.
///
/// Build one per session and share it by reference; nothing mutates it
/// after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
}

impl AttackTables {
    /// Computes both tables.
    pub fn new() -> Self {
        AttackTables {
            knight: leaper_table(&KNIGHT_OFFSETS),
            king: leaper_table(&KING_OFFSETS),
        }
    }

    /// Returns the squares a knight on `sq` could reach.
    #[inline]
    pub fn knight(&self, sq: Square) -> Bitboard {
        self.knight[sq.index() as usize]
    }

    /// Returns the squares a king on `sq` could reach.
    #[inline]
    pub fn king(&self, sq: Square) -> Bitboard {
        self.king[sq.index() as usize]
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AttackTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttackTables").finish_non_exhaustive()
    }
}

/// Builds a per-square table from a fixed set of steps. A step that would
/// leave the board is dropped.
fn leaper_table(offsets: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index() as usize] = offsets
            .iter()
            .filter_map(|&(dx, dy)| sq.offset(dx, dy))
            .collect();
    }
    table
}
