//! Shared world state for drag reordering BDD scenarios.

use std::{collections::HashMap, sync::Arc};

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    config::BoardConfig,
    services::{BoardPersistence, BoardStore, DragController},
};

/// Store type used by the BDD world.
pub type TestBoardStore = BoardStore<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for drag reordering behaviour tests.
pub struct DragWorld {
    pub backend: InMemoryKeyValueStore,
    pub store: TestBoardStore,
    pub drag: DragController,
    pub ids_by_title: HashMap<String, String>,
}

impl DragWorld {
    /// Creates a world over an empty board with the stock columns.
    #[must_use]
    pub fn new() -> Self {
        let backend = InMemoryKeyValueStore::new();
        let store = BoardStore::open(
            BoardPersistence::new(backend.clone()),
            Arc::new(DefaultClock),
            BoardConfig::default(),
        );

        Self {
            backend,
            store,
            drag: DragController::new(),
            ids_by_title: HashMap::new(),
        }
    }

    /// Resolves a task title used in a scenario to its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with that title was created.
    pub fn id_of(&self, title: &str) -> Result<String, eyre::Report> {
        self.ids_by_title
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Splits a comma separated scenario list into trimmed entries.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns the titles of the tasks in `tasks`, in order.
pub fn titles<'a>(tasks: impl IntoIterator<Item = &'a taskboard::board::domain::Task>) -> Vec<String> {
    tasks
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect()
}
