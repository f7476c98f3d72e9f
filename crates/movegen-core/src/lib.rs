//! Core board types.
//!
//! This crate provides the types shared by the move generator and its host:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for pseudo-legal move representation
//! - [`Board`], the square-by-square store
//! - Board description parsing ([`FenParser`]) and 64-character state
//!   strings ([`Snapshot`])

mod board;
mod color;
mod error;
mod fen;
mod mov;
mod piece;
mod snapshot;
mod square;

pub use board::Board;
pub use color::Color;
pub use error::BoardError;
pub use fen::{BoardDescription, FenParser, UnknownLetterPolicy};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use snapshot::Snapshot;
pub use square::{File, Rank, Square};
