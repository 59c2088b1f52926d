//! The board store: sole owner of the task list and column list.
//!
//! Every mutation is synchronous and applied in full before it returns, then
//! written through [`BoardPersistence`]. Stale ids are tolerated as no-ops.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::board::{
    config::BoardConfig,
    domain::{
        BoardState, Column, ColumnId, ColumnRemoval, Lane, MoveOutcome, Task, TaskDraft,
        TaskPatch,
    },
    ports::{KeyValueStore, NoticeLevel, Notifier},
    services::persistence::BoardPersistence,
};

/// Errors returned by board store operations that create records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardStoreError {
    /// The requested column does not exist.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),
    /// The board has no column to place a task in.
    #[error("board has no columns")]
    NoColumns,
    /// A column title was blank.
    #[error("column title must not be empty")]
    EmptyColumnTitle,
}

const TASK_CREATED: &str = "Task created successfully!";
const TASK_UPDATED: &str = "Task updated successfully!";
const TASK_DELETED: &str = "Task deleted successfully!";
const COLUMN_ADDED: &str = "Column added successfully!";

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Authoritative in-memory board with write-through persistence.
pub struct BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    state: BoardState,
    persistence: BoardPersistence<S>,
    clock: Arc<C>,
    config: BoardConfig,
    notifier: Option<Box<dyn Notifier>>,
    last_move: Option<(String, String)>,
    deferred: bool,
    dirty: bool,
    written_since_defer: bool,
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Opens the board held by `persistence`.
    ///
    /// An empty column list is replaced by the configured default columns,
    /// and invariant violations in the loaded data are repaired.
    #[must_use]
    pub fn open(persistence: BoardPersistence<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        let loaded = persistence.load();
        let mut state = if loaded.columns().is_empty() {
            let (tasks, _) = loaded.into_parts();
            BoardState::new(tasks, config.default_columns.clone())
        } else {
            loaded
        };

        let report = state.repair(&config.default_column);
        if !report.is_clean() {
            warn!(
                duplicates_dropped = report.duplicates_dropped,
                orphans_reassigned = report.orphans_reassigned,
                orphans_dropped = report.orphans_dropped,
                "repaired inconsistent board data"
            );
        }
        info!(
            tasks = state.tasks().len(),
            columns = state.columns().len(),
            "opened board"
        );

        Self {
            state,
            persistence,
            clock,
            config,
            notifier: None,
            last_move: None,
            deferred: false,
            dirty: false,
            written_since_defer: false,
        }
    }

    /// Reports successful task and column edits to `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Returns the current board.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the global task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// Returns the columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.state.columns()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.task(id)
    }

    /// Returns a column's tasks in display order.
    #[must_use]
    pub fn tasks_in_column(&self, id: &str) -> Vec<&Task> {
        self.state.tasks_in_column(id)
    }

    /// Returns every column with its tasks, in render order.
    #[must_use]
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        self.state.lanes()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &BoardPersistence<S> {
        &self.persistence
    }

    /// Returns the column new tasks land in by default: the configured
    /// default column if present, otherwise the first column.
    #[must_use]
    pub fn default_column(&self) -> Option<&ColumnId> {
        self.state
            .column(self.config.default_column.as_str())
            .or_else(|| self.state.columns().first())
            .map(Column::id)
    }

    /// Creates a task at the end of the global list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UnknownColumn`] when the draft names a
    /// missing column, or [`BoardStoreError::NoColumns`] when no column is
    /// available for a draft without one.
    pub fn create_task(&mut self, draft: TaskDraft) -> BoardStoreResult<Task> {
        let column = match draft.column() {
            Some(requested) if self.state.has_column(requested.as_str()) => requested.clone(),
            Some(requested) => return Err(BoardStoreError::UnknownColumn(requested.clone())),
            None => self
                .default_column()
                .cloned()
                .ok_or(BoardStoreError::NoColumns)?,
        };

        let task = Task::new(draft, column, &self.config.fallback_task_title, &*self.clock);
        debug!(task_id = %task.id(), column = %task.column(), "created task");
        self.state.push_task(task.clone());
        self.commit();
        self.notify(TASK_CREATED);
        Ok(task)
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Unknown ids are ignored. A patch that names a missing column is
    /// rejected whole, leaving the task untouched.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(column) = patch
            .column()
            .filter(|column| !self.state.has_column(column.as_str()))
        {
            warn!(task_id = id, %column, "rejecting update to missing column");
            return;
        }
        let Some(task) = self.state.task_mut(id) else {
            debug!(task_id = id, "ignoring update for unknown task");
            return;
        };
        task.apply(patch);
        debug!(task_id = id, "updated task");
        self.commit();
        self.notify(TASK_UPDATED);
    }

    /// Removes the task with `id`, if present.
    pub fn delete_task(&mut self, id: &str) {
        if self.state.remove_task(id).is_none() {
            debug!(task_id = id, "ignoring delete for unknown task");
            return;
        }
        debug!(task_id = id, "deleted task");
        self.commit();
        self.notify(TASK_DELETED);
    }

    /// Appends a column with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::EmptyColumnTitle`] for a blank title.
    pub fn add_column(&mut self, title: &str) -> BoardStoreResult<Column> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(BoardStoreError::EmptyColumnTitle);
        }
        let column = Column::new(
            ColumnId::generate(),
            trimmed,
            self.config.new_column_color.as_str(),
        );
        debug!(column = %column.id(), title = trimmed, "added column");
        self.state.push_column(column.clone());
        self.commit();
        self.notify(COLUMN_ADDED);
        Ok(column)
    }

    /// Deletes a column, handling its tasks per `removal`.
    ///
    /// Returns the removed column, or `None` (changing nothing) when the
    /// column is missing or the reassignment target is invalid.
    pub fn delete_column(&mut self, id: &str, removal: &ColumnRemoval) -> Option<Column> {
        let Some(removed) = self.state.remove_column(id, removal) else {
            debug!(column = id, ?removal, "ignoring column delete");
            return None;
        };
        debug!(column = id, ?removal, "deleted column");
        self.commit();
        Some(removed)
    }

    /// Moves `active_id` onto `over`, a task id or a column id.
    ///
    /// Repeating the move that was just applied, with no other mutation in
    /// between, is a no-op.
    pub fn move_task(&mut self, active_id: &str, over: Option<&str>) -> MoveOutcome {
        let key = over.map(|over_id| (active_id.to_owned(), over_id.to_owned()));
        if key.is_some() && key == self.last_move {
            return MoveOutcome::Unchanged;
        }

        let outcome = self
            .state
            .apply_move(active_id, over, self.config.column_drop);
        if outcome.is_changed() {
            debug!(task_id = active_id, over = ?over, ?outcome, "moved task");
            self.persist();
            self.last_move = key;
        }
        outcome
    }

    /// Writes the board to storage now, even while writes are deferred.
    pub fn flush(&mut self) {
        self.persistence.save(&self.state);
        self.dirty = false;
        if self.deferred {
            self.written_since_defer = true;
        }
    }

    #[must_use]
    pub(crate) fn snapshot(&self) -> BoardState {
        self.state.clone()
    }

    pub(crate) fn restore(&mut self, snapshot: BoardState) {
        let changed = snapshot != self.state;
        self.state = snapshot;
        self.last_move = None;
        if self.deferred && !self.written_since_defer {
            // Storage still holds the snapshot.
            self.dirty = false;
        } else if changed {
            self.flush();
        }
    }

    /// Holds drag-step writes in memory until [`Self::resume_persistence`].
    /// Other mutations still write through, pending steps included.
    pub(crate) fn defer_persistence(&mut self) {
        self.deferred = true;
        self.written_since_defer = false;
    }

    /// Ends deferral, writing once if anything changed meanwhile.
    pub(crate) fn resume_persistence(&mut self) {
        self.deferred = false;
        self.written_since_defer = false;
        if self.dirty {
            self.flush();
        }
    }

    /// Forgets the last applied move so a new gesture can repeat it.
    pub(crate) fn end_gesture(&mut self) {
        self.last_move = None;
    }

    fn commit(&mut self) {
        self.last_move = None;
        self.flush();
    }

    fn persist(&mut self) {
        if self.deferred {
            self.dirty = true;
        } else {
            self.flush();
        }
    }

    fn notify(&self, message: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(NoticeLevel::Success, message);
        }
    }
}
