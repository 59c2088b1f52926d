//! Error types for board domain parsing and encoding.

use thiserror::Error;

/// Error returned while parsing a task priority from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Errors raised while encoding a board to its text form.
///
/// Decoding never fails: malformed input decodes to an empty board.
#[derive(Debug, Error)]
pub enum BoardCodecError {
    /// JSON encoding failed.
    #[error("failed to encode board state: {0}")]
    Encode(#[from] serde_json::Error),
}
