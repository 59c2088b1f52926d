//! Board column record and the stock column set.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A vertical lane on the board.
///
/// `color` is an opaque style token for the renderer; nothing in the engine
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    #[serde(default)]
    color: String,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the style token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Returns the stock columns a fresh board starts with.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do", "bg-blue-500"),
        Column::new("in-progress", "In Progress", "bg-yellow-500"),
        Column::new("review", "Review", "bg-purple-500"),
        Column::new("done", "Done", "bg-green-500"),
    ]
}
