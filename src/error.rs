//! Error types for the gambit crate

use thiserror::Error;

/// Main error type for the gambit crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no valid moves found")]
    NoValidMoves,

    #[error("invalid move: square ({row}, {col}) is already occupied")]
    SquareOccupied { row: usize, col: usize },

    #[error("square ({row}, {col}) is out of bounds for a {size}x{size} board")]
    SquareOutOfBounds { row: usize, col: usize, size: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of bounds (must be 0-{max})")]
    ColumnOutOfBounds { column: usize, max: usize },
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
