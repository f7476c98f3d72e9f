//! Fixed-length state strings for saving and restoring a board.
//!
//! A state string has exactly 64 characters. Character `i` describes
//! `Square(i)`, so the string starts at a1 and runs along each rank before
//! moving up to the next. `'0'` marks an empty square, any other character
//! is a piece letter with uppercase for White.

use crate::{Board, BoardError, Piece, Square};
use std::fmt;
use std::str::FromStr;

/// A validated 64-character state string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    /// Length of every state string.
    pub const LEN: usize = Square::COUNT;

    /// Character used for an empty square.
    pub const EMPTY: char = '0';

    /// Encodes a board.
    pub fn encode(board: &Board) -> Self {
        Snapshot(Square::all().map(|sq| board.piece_char(sq)).collect())
    }

    /// Validates a state string.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let len = s.chars().count();
        if len != Self::LEN {
            return Err(BoardError::MalformedSnapshot(format!(
                "expected {} characters, got {}",
                Self::LEN,
                len
            )));
        }
        if let Some((index, c)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| c != Self::EMPTY && Piece::from_char(c).is_none())
        {
            return Err(BoardError::MalformedSnapshot(format!(
                "invalid character '{}' at index {}",
                c, index
            )));
        }
        Ok(Snapshot(s.to_string()))
    }

    /// Iterates occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.0.bytes().enumerate().filter_map(|(i, b)| {
            Piece::from_char(b as char).map(|p| (Square::from_bit(i as u32), p))
        })
    }

    /// Rebuilds the board this string describes.
    pub fn decode(&self) -> Board {
        let mut board = Board::empty();
        for (sq, piece) in self.pieces() {
            board.set(sq, Some(piece));
        }
        tracing::debug!(pieces = board.piece_count(), "decoded snapshot");
        board
    }

    /// Returns the state string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Board {
    /// Replaces a board from a state string.
    pub fn from_snapshot(s: &str) -> Result<Self, BoardError> {
        Ok(Snapshot::parse(s)?.decode())
    }

    /// Encodes this board as a state string.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::encode(self)
    }
}

impl FromStr for Snapshot {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Snapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
