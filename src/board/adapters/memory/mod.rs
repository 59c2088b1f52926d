//! In-memory adapters for board storage, clipboard, and notifications.

mod clipboard;
mod store;

pub use clipboard::{InMemoryClipboard, RecordingNotifier};
pub use store::InMemoryKeyValueStore;
