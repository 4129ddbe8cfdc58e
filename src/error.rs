//! Error types for the engine boundary.
//!
//! Validation happens once, when a serialized position enters through the
//! boundary operations; the move generator and search assume a valid
//! position and never re-validate.

use thiserror::Error;

/// Errors surfaced by the boundary operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The serialized position failed validation.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// The side to move has no legal moves, so no best move exists.
    #[error("no legal move for the side to move")]
    NoLegalMove,
}

/// Result type alias for boundary operations.
pub type EngineResult<T> = Result<T, EngineError>;
