//! Port contracts for the task board.
//!
//! Ports define the storage, clipboard, and notification surfaces the board
//! services talk to, independent of any host environment.

pub mod clipboard;
pub mod notifier;
pub mod storage;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use notifier::{NoticeLevel, Notifier};
pub use storage::{KeyValueStore, StorageError, StorageResult};
