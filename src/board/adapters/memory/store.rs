//! In-memory key-value store for tests and ephemeral boards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};

/// Shared in-memory key-value store.
///
/// Clones share the same entries, so a test can keep a handle while a board
/// store owns another. A byte quota and an availability switch let tests
/// reproduce full or disabled browser storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    unavailable: bool,
    writes: usize,
}

impl InMemoryStoreState {
    fn usage_with(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, stored)| existing.len() + stored.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

fn lock_error(err: impl std::fmt::Display) -> StorageError {
    StorageError::Unavailable(format!("in-memory store lock poisoned: {err}"))
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `bytes` of keys plus values.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.quota_bytes = Some(bytes);
        }
        store
    }

    /// Creates a store pre-populated with entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.entries = entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect();
        }
        store
    }

    /// Makes every subsequent operation fail with
    /// [`StorageError::Unavailable`] until re-enabled.
    pub fn set_available(&self, available: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = !available;
        }
    }

    /// Returns how many successful writes the store has accepted.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.read().map(|state| state.writes).unwrap_or_default()
    }

    /// Returns the raw stored value, bypassing the availability switch.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.entries.get(key).cloned())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        if state.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        if let Some(limit) = state.quota_bytes {
            let required = state.usage_with(key, value);
            if required > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    required,
                    limit,
                });
            }
        }
        state.entries.insert(key.to_owned(), value.to_owned());
        state.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        state.entries.remove(key);
        Ok(())
    }
}
