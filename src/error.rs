//! Error types for the oxo crate

use std::fmt;

use thiserror::Error;

/// Why [`Board::apply`](crate::tictactoe::Board::apply) refused an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalActionReason {
    /// Row or column outside `0..=2`
    OutOfBounds,
    /// Target cell already holds a mark
    Occupied,
}

impl fmt::Display for IllegalActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalActionReason::OutOfBounds => {
                write!(f, "out of bounds (row and column must be 0-2)")
            }
            IllegalActionReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal action ({row}, {col}): {reason}")]
    IllegalAction {
        row: usize,
        col: usize,
        reason: IllegalActionReason,
    },

    #[error("utility is undefined for non-terminal board '{board}'")]
    NotTerminal { board: String },

    #[error("game already over")]
    GameOver,

    #[error("no legal actions available on board '{board}'")]
    NoLegalActions { board: String },

    #[error("wrong number of cells: expected {expected}, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid action '{input}' (expected 'row col' or 'row,col')")]
    InvalidActionInput { input: String },

    #[error("invalid player '{input}' (expected 'x' or 'o')")]
    InvalidPlayer { input: String },

    #[error("invalid game record at move {index}: {message}")]
    InvalidGameRecord { index: usize, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    /// True for errors raised by `apply` on a bad action
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, Error::IllegalAction { .. })
    }

    /// Adapter for `map_err` naming the I/O operation that failed
    pub fn io(operation: impl Into<String>) -> impl FnOnce(std::io::Error) -> Error {
        let operation = operation.into();
        move |source| Error::Io { operation, source }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
