//! Taskboard: drag-and-drop kanban ordering engine.
//!
//! This crate holds the state machine behind a personal kanban board: the
//! task and column model, the reordering driven by drag gestures, and
//! best-effort persistence to a local key-value store. Rendering, toasts,
//! and the editor's own form widgets are left to the host.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board data and ordering rules
//! - **Ports**: Abstract trait interfaces for storage, clipboard, and notices
//! - **Adapters**: Concrete implementations of ports (memory, directory)
//! - **Services**: The board store and drag controller that drive the domain
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use taskboard::board::{
//!     adapters::memory::InMemoryKeyValueStore,
//!     config::BoardConfig,
//!     domain::TaskDraft,
//!     services::{BoardPersistence, BoardStore, DragController},
//! };
//!
//! let persistence = BoardPersistence::new(InMemoryKeyValueStore::new());
//! let mut store = BoardStore::open(persistence, Arc::new(DefaultClock), BoardConfig::default());
//! let task = store.create_task(TaskDraft::new("Write docs")).expect("default column exists");
//!
//! let mut drag = DragController::new();
//! drag.drag_start(&mut store, task.id().as_str());
//! drag.drag_end(&mut store, task.id().as_str(), Some("done"));
//!
//! assert_eq!(store.task(task.id().as_str()).map(|t| t.column().as_str()), Some("done"));
//! ```

pub mod board;
