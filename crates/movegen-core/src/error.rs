//! Errors raised while reading textual board encodings.

use thiserror::Error;

/// Errors that can occur when turning text into a [`Board`](crate::Board).
///
/// Both kinds are detected before any board is handed back, so a caller
/// never sees a partially filled board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board description does not describe exactly 8 ranks of 8 squares,
    /// or contains a character it cannot place.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// The state string is not 64 characters long or uses a character
    /// outside `0pnbrqkPNBRQK`.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}
