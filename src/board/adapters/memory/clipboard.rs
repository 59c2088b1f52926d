//! In-memory clipboard and notifier doubles.

use std::sync::{Arc, RwLock};

use crate::board::ports::{ClipboardError, ClipboardWriter, NoticeLevel, Notifier};

/// Clipboard that keeps the last written text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    state: Arc<RwLock<ClipboardState>>,
}

#[derive(Debug, Default)]
struct ClipboardState {
    contents: Option<String>,
    denied: bool,
}

impl InMemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    #[must_use]
    pub fn denied() -> Self {
        let clipboard = Self::new();
        if let Ok(mut state) = clipboard.state.write() {
            state.denied = true;
        }
        clipboard
    }

    /// Returns the last written text.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| state.contents.clone())
    }
}

impl ClipboardWriter for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        if state.denied {
            return Err(ClipboardError::PermissionDenied);
        }
        state.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Notifier that records every message it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded messages in order.
    #[must_use]
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices
            .read()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        if let Ok(mut notices) = self.notices.write() {
            notices.push((level, message.to_owned()));
        }
    }
}
