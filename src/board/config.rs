//! Board configuration.
//!
//! Every field has a default matching the stock board, so an empty TOML file
//! (or no file at all) yields the reference behaviour.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::domain::{Column, ColumnDropPolicy, ColumnId, default_columns};

/// Errors that can occur when loading board configuration.
#[derive(Debug, thiserror::Error)]
pub enum BoardConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// When drag gestures write the board to storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPersistence {
    /// Every drag-over step is written immediately.
    #[default]
    EveryStep,
    /// Drag-over steps stay in memory; one write happens at drag-end or
    /// cancel.
    OnDrop,
}

/// Storage key names for the two persisted lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Key holding the task list.
    pub tasks: String,
    /// Key holding the column list.
    pub columns: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "kanban-tasks".to_owned(),
            columns: "kanban-columns".to_owned(),
        }
    }
}

/// Fully resolved board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Storage key names.
    pub storage: StorageKeys,
    /// Column new tasks land in when none is requested.
    pub default_column: ColumnId,
    /// Columns a board starts with when storage holds none.
    pub default_columns: Vec<Column>,
    /// Style token given to columns added at runtime.
    pub new_column_color: String,
    /// Title used when a task is created with a blank title.
    pub fallback_task_title: String,
    /// Placement of a task dropped onto empty column space.
    pub column_drop: ColumnDropPolicy,
    /// When drag gestures are written to storage.
    pub drag_persistence: DragPersistence,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            default_column: ColumnId::new("todo"),
            default_columns: default_columns(),
            new_column_color: "bg-gray-500".to_owned(),
            fallback_task_title: "New Task".to_owned(),
            column_drop: ColumnDropPolicy::default(),
            drag_persistence: DragPersistence::default(),
        }
    }
}

impl BoardConfig {
    /// Parses configuration from TOML text. Missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::ParseToml`] when the text is not valid
    /// configuration TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, BoardConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, BoardConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BoardConfigError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Sets the column-drop placement.
    #[must_use]
    pub const fn with_column_drop(mut self, policy: ColumnDropPolicy) -> Self {
        self.column_drop = policy;
        self
    }

    /// Sets the drag persistence policy.
    #[must_use]
    pub const fn with_drag_persistence(mut self, policy: DragPersistence) -> Self {
        self.drag_persistence = policy;
        self
    }

    /// Replaces the starting columns.
    #[must_use]
    pub fn with_default_columns(mut self, columns: Vec<Column>) -> Self {
        self.default_columns = columns;
        self
    }
}
