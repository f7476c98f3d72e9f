//! Square-by-square board store.

use crate::{BoardError, Color, FenParser, Piece, Square};
use std::fmt;

/// The board: one optional piece per square.
///
/// This is the store the host renders from. Pieces are placed and removed
/// one square at a time, or the whole board is replaced from a board
/// description or a state string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates the standard opening board.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Parses the piece placement of a board description, rejecting
    /// unrecognised piece letters.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        Ok(FenParser::default().parse(fen)?.board)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Places (or removes, with `None`) a piece, returning what was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index() as usize], piece)
    }

    /// Returns the piece at a linear index, or `None` when the index is
    /// empty or off the board.
    pub fn get_index(&self, index: usize) -> Option<Piece> {
        self.squares.get(index).copied().flatten()
    }

    /// Returns the piece at the given file and rank (each 0-7).
    pub fn get_xy(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::from_coords(file, rank).and_then(|sq| self.get(sq))
    }

    /// Places a piece at the given file and rank.
    pub fn set_xy(
        &mut self,
        file: i8,
        rank: i8,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, BoardError> {
        let sq = Square::from_coords(file, rank).ok_or_else(|| {
            BoardError::MalformedPosition(format!("({}, {}) is off the board", file, rank))
        })?;
        Ok(self.set(sq, piece))
    }

    /// Returns the color of the piece at the given coordinates. Coordinates
    /// off the board and empty squares both yield `None`.
    pub fn owner_at(&self, file: i8, rank: i8) -> Option<Color> {
        self.get_xy(file, rank).map(|p| p.color)
    }

    /// Returns the state-string character for a square: `'0'` when empty,
    /// otherwise the piece letter.
    pub fn piece_char(&self, sq: Square) -> char {
        self.get(sq).map_or('0', Piece::to_char)
    }

    /// Removes every piece.
    pub fn clear(&mut self) {
        self.squares = [None; Square::COUNT];
    }

    /// Iterates occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// Writes the piece-placement field of a board description.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();

        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.get_xy(file, rank) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.get_xy(file, rank).map_or('.', Piece::to_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
