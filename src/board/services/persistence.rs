//! Best-effort board persistence over a key-value store.
//!
//! The task list and the column list live under two independent keys. Every
//! failure is absorbed here: a broken part loads as empty and a failed write
//! is logged and dropped, so callers cannot tell "empty" from "broken".

use tracing::{debug, warn};

use crate::board::{
    config::StorageKeys,
    domain::{
        BoardState, deserialize_columns, deserialize_tasks, serialize_columns, serialize_tasks,
    },
    ports::KeyValueStore,
};

/// Loads and saves whole boards through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct BoardPersistence<S>
where
    S: KeyValueStore,
{
    store: S,
    keys: StorageKeys,
}

impl<S> BoardPersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence adapter using the stock key names.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    /// Creates a persistence adapter using custom key names.
    #[must_use]
    pub const fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the key names in use.
    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Reads the board. Each part that is missing, unreadable, or malformed
    /// comes back empty.
    #[must_use]
    pub fn load(&self) -> BoardState {
        let tasks = self
            .read(&self.keys.tasks)
            .map(|text| deserialize_tasks(&text))
            .unwrap_or_default();
        let columns = self
            .read(&self.keys.columns)
            .map(|text| deserialize_columns(&text))
            .unwrap_or_default();
        debug!(
            tasks = tasks.len(),
            columns = columns.len(),
            "loaded board from storage"
        );
        BoardState::new(tasks, columns)
    }

    /// Writes both parts of the board. Failures are logged, never returned.
    pub fn save(&self, board: &BoardState) {
        match serialize_tasks(board.tasks()) {
            Ok(text) => self.write(&self.keys.tasks, &text),
            Err(error) => warn!(%error, "could not encode task list; skipping save"),
        }
        match serialize_columns(board.columns()) {
            Ok(text) => self.write(&self.keys.columns, &text),
            Err(error) => warn!(%error, "could not encode column list; skipping save"),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "storage read failed; treating as empty");
                None
            }
        }
    }

    fn write(&self, key: &str, text: &str) {
        if let Err(error) = self.store.set(key, text) {
            warn!(key, %error, "storage write failed; change kept in memory only");
        }
    }
}
