//! Clipboard port used by the board export.

use thiserror::Error;

/// Destination for exported board text.
pub trait ClipboardWriter {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the clipboard rejects the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard write failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The host denied clipboard access.
    #[error("clipboard access denied")]
    PermissionDenied,
    /// The clipboard is not available in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
