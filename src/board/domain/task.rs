//! Task record, priority levels, and the partial records used to create and
//! edit tasks.

use super::{ColumnId, ParseTaskPriorityError, TaskId, TaskTags, timestamp};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default priority for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work item on the board.
///
/// Field names follow the persisted JSON layout (`createdAt`, `dueDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    column: ColumnId,
    #[serde(default)]
    priority: TaskPriority,
    #[serde(with = "timestamp::required")]
    created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::optional"
    )]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    tags: TaskTags,
}

/// Parameter object for reconstructing a task from stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description.
    pub description: String,
    /// Stored column reference.
    pub column: ColumnId,
    /// Stored priority.
    pub priority: TaskPriority,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Stored tags.
    pub tags: TaskTags,
}

impl Task {
    /// Creates a new task in `column` from a draft, stamping `createdAt`
    /// from the clock.
    ///
    /// A blank draft title is replaced by `fallback_title`.
    #[must_use]
    pub fn new(draft: TaskDraft, column: ColumnId, fallback_title: &str, clock: &impl Clock) -> Self {
        let title = draft
            .title
            .map(|title| title.trim().to_owned())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| fallback_title.to_owned());

        Self {
            id: TaskId::generate(),
            title,
            description: draft.description.unwrap_or_default(),
            column,
            priority: draft.priority.unwrap_or_default(),
            created_at: timestamp::to_millis(clock.utc()),
            due_date: draft.due_date.map(timestamp::to_millis),
            tags: draft.tags,
        }
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            column: data.column,
            priority: data.priority,
            created_at: timestamp::to_millis(data.created_at),
            due_date: data.due_date.map(timestamp::to_millis),
            tags: data.tags,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the column the task belongs to.
    #[must_use]
    pub const fn column(&self) -> &ColumnId {
        &self.column
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TaskTags {
        &self.tags
    }

    pub(crate) fn set_column(&mut self, column: ColumnId) {
        self.column = column;
    }

    /// Merges the fields present in `patch`. Identity and creation time are
    /// never touched.
    pub(crate) fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(column) = patch.column {
            self.column = column;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date.map(timestamp::to_millis);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial record used to create a task.
///
/// Absent fields take the board defaults: medium priority, the default
/// column, an empty description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: Option<String>,
    description: Option<String>,
    column: Option<ColumnId>,
    priority: Option<TaskPriority>,
    due_date: Option<DateTime<Utc>>,
    tags: TaskTags,
}

impl TaskDraft {
    /// Creates a draft with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Places the task in a specific column.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the tags; duplicates are dropped.
    #[must_use]
    pub fn with_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the requested column, if any.
    #[must_use]
    pub const fn column(&self) -> Option<&ColumnId> {
        self.column.as_ref()
    }
}

/// Partial record used to edit a task. Only present fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    column: Option<ColumnId>,
    priority: Option<TaskPriority>,
    due_date: Option<Option<DateTime<Utc>>>,
    tags: Option<TaskTags>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to another column.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the tags; duplicates are dropped.
    #[must_use]
    pub fn with_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Returns the column the patch moves the task to, if any.
    #[must_use]
    pub const fn column(&self) -> Option<&ColumnId> {
        self.column.as_ref()
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
    }
}
