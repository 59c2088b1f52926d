//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    config::BoardConfig,
    domain::TaskDraft,
    services::{BoardPersistence, BoardStore},
};

/// Store type used across in-memory integration tests.
pub type TestStore = BoardStore<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh shared backend for each test.
#[fixture]
pub fn backend() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Opens a board store over `backend` with the given configuration.
pub fn open_store(backend: &InMemoryKeyValueStore, config: BoardConfig) -> TestStore {
    BoardStore::open(
        BoardPersistence::new(backend.clone()),
        Arc::new(DefaultClock),
        config,
    )
}

/// Creates one task per `(title, column)` pair and returns their ids in
/// creation order.
///
/// # Errors
///
/// Returns an error if any task cannot be created.
pub fn create_tasks(
    store: &mut TestStore,
    tasks: &[(&str, &str)],
) -> Result<Vec<String>, eyre::Report> {
    tasks
        .iter()
        .map(|(title, column)| {
            store
                .create_task(TaskDraft::new(*title).with_column(*column))
                .map(|task| task.id().as_str().to_owned())
                .map_err(|err| eyre::eyre!("create {title} in {column}: {err}"))
        })
        .collect()
}

/// Returns the titles of a column's tasks in display order.
pub fn column_titles(store: &TestStore, column: &str) -> Vec<String> {
    store
        .tasks_in_column(column)
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect()
}
