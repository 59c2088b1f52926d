//! Application services for the task board.

pub mod drag;
pub mod editor;
pub mod export;
pub mod persistence;
pub mod store;

pub use drag::{DragController, DragEvent};
pub use editor::{EditorMode, TaskForm};
pub use export::{BoardExport, ColumnExport, ExportError, export_to_clipboard};
pub use persistence::BoardPersistence;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
