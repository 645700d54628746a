//! Error types for position parsing and move selection.

use super::types::Side;

/// Errors raised while turning a board snapshot into a [`Position`](super::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A cell holds a character that names no piece kind
    #[error("unrecognized piece character {found:?} at board index {index}")]
    UnknownPiece { index: usize, found: char },

    /// The board description is not 64 cells long
    #[error("board description has {len} cells, expected 64")]
    BoardLength { len: usize },

    /// The side indicator is neither 1 nor -1
    #[error("side indicator {value} is neither 1 nor -1")]
    UnknownSide { value: i64 },
}

/// Errors a decision can end with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("malformed position: {0}")]
    MalformedPosition(#[from] ParseError),

    /// The side to move has nothing to play
    #[error("{side:?} has no legal move")]
    NoLegalMove { side: Side },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
