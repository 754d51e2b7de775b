//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid room data.
/// These are independent of where the data came from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("room {position}: expected {expected} dimensions, got {actual}")]
    InvalidDimensions {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cannot parse room line {line:?} with delimiter {delimiter:?}: invalid number {field:?}")]
    RoomParse {
        line: String,
        delimiter: String,
        field: String,
    },

    #[error("invalid delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter { delimiter: String, reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
