//! Task editor hand-off.
//!
//! The editor form is an external collaborator; this module models the data
//! it exchanges with the store. The form prefills from a task in edit mode,
//! keeps its tag list duplicate-free, and on save becomes either a creation
//! draft or a full-field patch.

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::board::{
    domain::{ColumnId, Task, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskTags, timestamp},
    ports::KeyValueStore,
    services::store::{BoardStore, BoardStoreResult},
};

/// Whether the editor is creating a task or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Opened with nothing; saving creates a task.
    Create,
    /// Opened on an existing task; saving updates it.
    Edit(TaskId),
}

/// Field values held by the task editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// Title as typed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// Selected column.
    pub column: ColumnId,
    /// Selected priority.
    pub priority: TaskPriority,
    /// Chosen due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    tags: TaskTags,
}

impl TaskForm {
    /// Returns a blank form targeting `column`.
    #[must_use]
    pub fn for_create(column: ColumnId) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            column,
            priority: TaskPriority::default(),
            due_date: None,
            tags: TaskTags::new(),
        }
    }

    /// Returns a form prefilled from an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            column: task.column().clone(),
            priority: task.priority(),
            due_date: task.due_date(),
            tags: task.tags().clone(),
        }
    }

    /// Returns the tags in entry order.
    #[must_use]
    pub const fn tags(&self) -> &TaskTags {
        &self.tags
    }

    /// Adds a tag; blank and repeated labels are ignored.
    pub fn add_tag(&mut self, label: &str) -> bool {
        self.tags.insert(label)
    }

    /// Removes a tag.
    pub fn remove_tag(&mut self, label: &str) -> bool {
        self.tags.remove(label)
    }

    /// Sets the due date from date-input text (`YYYY-MM-DD`). Blank text
    /// clears it. Returns `false`, leaving the date as is, for unreadable
    /// text.
    pub fn set_due_date_text(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            self.due_date = None;
            return true;
        }
        match timestamp::parse(text) {
            Some(parsed) => {
                self.due_date = Some(parsed);
                true
            }
            None => false,
        }
    }

    /// Returns the due date as date-input text, or an empty string.
    #[must_use]
    pub fn due_date_text(&self) -> String {
        self.due_date
            .map(|due| due.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Returns whether the form may be saved: the title must not be blank.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Converts the form into a creation draft.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        let draft = TaskDraft::new(self.title.trim())
            .with_description(self.description.trim())
            .with_column(self.column)
            .with_priority(self.priority)
            .with_tags(self.tags.as_slice());
        match self.due_date {
            Some(due) => draft.with_due_date(due),
            None => draft,
        }
    }

    /// Converts the form into a patch replacing every editable field,
    /// including clearing the due date when none is set.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch::new()
            .with_title(self.title.trim())
            .with_description(self.description.trim())
            .with_column(self.column)
            .with_priority(self.priority)
            .with_due_date(self.due_date)
            .with_tags(self.tags.as_slice())
    }
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Applies a saved editor form: creates a task in create mode, updates
    /// the edited task in edit mode. Returns the resulting task, or `None`
    /// when the edited task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns the [`create_task`](Self::create_task) error in create mode.
    pub fn apply_editor(
        &mut self,
        mode: &EditorMode,
        form: TaskForm,
    ) -> BoardStoreResult<Option<Task>> {
        match mode {
            EditorMode::Create => self.create_task(form.into_draft()).map(Some),
            EditorMode::Edit(id) => {
                self.update_task(id.as_str(), form.into_patch());
                Ok(self.task(id.as_str()).cloned())
            }
        }
    }
}
