//! Error types for engine operations.
//!
//! Every error is reported before any state is touched, so a failed call
//! leaves the game exactly as it was.

use thiserror::Error;

/// Errors returned by the engine and its test doubles.
#[derive(Error, Debug)]
pub enum ReversiError {
    /// Construction or `load_game` input breaks a board invariant.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A position lies outside the board.
    #[error("Position ({row}, {col}) is outside a {side}x{side} board")]
    OutOfBounds { row: usize, col: usize, side: usize },

    /// Simulation was asked to play on a square that already holds a piece.
    #[error("There is already a piece at ({row}, {col})")]
    OccupiedCell { row: usize, col: usize },

    /// The implementation does not model this operation.
    #[error("Operation not supported by this implementation: {operation}")]
    Unsupported { operation: &'static str },

    /// A strategy name did not match any known strategy.
    #[error("Unknown strategy '{name}' (expected random, greedy or lookahead)")]
    UnknownStrategy { name: String },

    /// A snapshot could not be encoded or decoded.
    #[error("Snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl ReversiError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ReversiError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type ReversiResult<T> = Result<T, ReversiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReversiError::OutOfBounds { row: 8, col: 1, side: 8 };
        assert_eq!(err.to_string(), "Position (8, 1) is outside a 8x8 board");

        let err = ReversiError::invalid("parity mismatch");
        assert_eq!(err.to_string(), "Invalid configuration: parity mismatch");

        let err = ReversiError::OccupiedCell { row: 3, col: 3 };
        assert!(err.to_string().contains("(3, 3)"));
    }
}
