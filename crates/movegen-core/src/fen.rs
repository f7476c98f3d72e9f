//! Board description parsing (FEN-style notation).
//!
//! Only the piece-placement field affects the board. The side-to-move,
//! castling, en passant, halfmove and fullmove fields are split off and
//! kept verbatim on [`BoardDescription`], but nothing applies them.

use crate::{Board, BoardError, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// What to do with a letter that names no known piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLetterPolicy {
    /// Report the letter as a [`BoardError::MalformedPosition`].
    #[default]
    Reject,
    /// Place a pawn, colored by the letter's case. Only ASCII letters are
    /// converted; digits out of range and punctuation are still rejected.
    Pawn,
}

/// A parsed board description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDescription {
    /// The board built from the piece-placement field.
    pub board: Board,
    /// Side to move (e.g., "w"), unapplied.
    pub active_color: Option<String>,
    /// Castling availability (e.g., "KQkq", "-"), unapplied.
    pub castling: Option<String>,
    /// En passant target square (e.g., "e3", "-"), unapplied.
    pub en_passant: Option<String>,
    /// Halfmove clock, unapplied.
    pub halfmove_clock: Option<String>,
    /// Fullmove number, unapplied.
    pub fullmove_number: Option<String>,
}

/// Parser for board descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenParser {
    pub unknown_letters: UnknownLetterPolicy,
}

impl FenParser {
    /// The standard opening board description.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Creates a parser with the given unknown-letter policy.
    pub const fn new(unknown_letters: UnknownLetterPolicy) -> Self {
        FenParser { unknown_letters }
    }

    /// Parses a board description.
    ///
    /// Ranks are read from rank 8 down to rank 1, files from a to h. A digit
    /// skips that many squares. Every rank must cover exactly eight squares
    /// and there must be exactly eight ranks.
    pub fn parse(&self, fen: &str) -> Result<BoardDescription, BoardError> {
        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| BoardError::MalformedPosition("empty board description".to_string()))?;

        let board = self.parse_placement(placement)?;

        let mut tail = fields.map(str::to_string);
        let description = BoardDescription {
            board,
            active_color: tail.next(),
            castling: tail.next(),
            en_passant: tail.next(),
            halfmove_clock: tail.next(),
            fullmove_number: tail.next(),
        };

        let extra = tail.count();
        if extra > 0 {
            return Err(BoardError::MalformedPosition(format!(
                "expected at most 6 fields, got {}",
                6 + extra
            )));
        }

        tracing::debug!(
            pieces = description.board.piece_count(),
            "parsed board description"
        );
        Ok(description)
    }

    fn parse_placement(&self, placement: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut rank: i8 = 7;
        let mut file: i8 = 0;

        for c in placement.chars() {
            match c {
                '/' => {
                    if file != 8 {
                        return Err(BoardError::MalformedPosition(format!(
                            "rank {} has {} squares, expected 8",
                            rank + 1,
                            file
                        )));
                    }
                    rank -= 1;
                    if rank < 0 {
                        return Err(BoardError::MalformedPosition(
                            "more than 8 ranks".to_string(),
                        ));
                    }
                    file = 0;
                }
                '1'..='8' => {
                    file += (c as u8 - b'0') as i8;
                    if file > 8 {
                        return Err(BoardError::MalformedPosition(format!(
                            "rank {} runs past the h-file",
                            rank + 1
                        )));
                    }
                }
                _ => {
                    let piece = self.piece_for(c, rank)?;
                    let sq = Square::from_coords(file, rank).ok_or_else(|| {
                        BoardError::MalformedPosition(format!(
                            "rank {} runs past the h-file",
                            rank + 1
                        ))
                    })?;
                    board.set(sq, Some(piece));
                    file += 1;
                }
            }
        }

        if rank != 0 || file != 8 {
            return Err(BoardError::MalformedPosition(format!(
                "expected 8 ranks of 8 squares, stopped at rank {} after {} squares",
                rank + 1,
                file
            )));
        }

        Ok(board)
    }

    fn piece_for(&self, c: char, rank: i8) -> Result<Piece, BoardError> {
        if let Some(piece) = Piece::from_char(c) {
            return Ok(piece);
        }
        match self.unknown_letters {
            UnknownLetterPolicy::Pawn if c.is_ascii_alphabetic() => {
                tracing::warn!(letter = %c, rank = rank + 1, "unknown piece letter placed as pawn");
                let color = if c.is_ascii_uppercase() {
                    crate::Color::White
                } else {
                    crate::Color::Black
                };
                Ok(Piece::new(PieceKind::Pawn, color))
            }
            _ => Err(BoardError::MalformedPosition(format!(
                "invalid character '{}' in rank {}",
                c,
                rank + 1
            ))),
        }
    }
}
