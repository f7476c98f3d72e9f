//! Pseudo-legal move generation over bitboards.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square sets with set operations and ascending iteration
//! - [`AttackTables`] - knight and king reach, computed once per session
//! - [`PieceBoards`] - per-kind, per-color bitboards rebuilt from a board
//! - [`generate_moves`] - knight, king and pawn moves for one side
//! - [`Session`] - the board, the turn and the two legality queries a host uses
//!
//! # Scope
//!
//! Moves are pseudo-legal: they respect piece movement and occupancy but may
//! leave the mover's king in check. Bishops, rooks and queens do not move.
//! Castling, en passant and promotion are not generated.
//!
//! # Example
//!
//! ```
//! use movegen_core::{Board, Color, Square};
//! use movegen_engine::{generate_moves, AttackTables};
//!
//! let tables = AttackTables::new();
//! let moves = generate_moves(&tables, &Board::startpos(), Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(moves.can_move(e2, e4));
//! ```

mod bitboard;
mod config;
pub mod movegen;
mod position;
mod session;

pub use bitboard::{Bitboard, BitboardIter};
pub use config::{ConfigError, SessionConfig};
pub use movegen::{
    generate_from_view, generate_moves, pawn_targets, AttackTables, MoveGenerator, MoveList,
    PawnMove,
};
pub use position::PieceBoards;
pub use session::{Session, SessionError};
