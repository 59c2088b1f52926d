//! Read-only export of the board, grouped by column title.

use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::board::{
    domain::{BoardCodecError, BoardState, Task},
    ports::{ClipboardError, ClipboardWriter, KeyValueStore, NoticeLevel, Notifier},
    services::store::BoardStore,
};

const EXPORT_SUCCESS: &str = "Tasks copied to clipboard!";
const EXPORT_FAILURE: &str = "Failed to export tasks";

/// One column's worth of exported tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnExport<'a> {
    /// Column title.
    pub column: &'a str,
    /// Tasks in display order.
    pub tasks: Vec<&'a Task>,
}

/// Snapshot of the board grouped by column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardExport<'a>(Vec<ColumnExport<'a>>);

impl<'a> BoardExport<'a> {
    /// Groups the board's tasks under their column titles.
    #[must_use]
    pub fn from_state(state: &'a BoardState) -> Self {
        Self(
            state
                .lanes()
                .into_iter()
                .map(|lane| ColumnExport {
                    column: lane.column.title(),
                    tasks: lane.tasks,
                })
                .collect(),
        )
    }

    /// Returns the groups in column order.
    #[must_use]
    pub fn groups(&self) -> &[ColumnExport<'a>] {
        &self.0
    }

    /// Renders the export as two-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCodecError::Encode`] if JSON encoding fails.
    pub fn to_pretty_json(&self) -> Result<String, BoardCodecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Export failure. The user has already been notified when this is returned.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The board could not be encoded.
    #[error(transparent)]
    Encode(#[from] BoardCodecError),
    /// The clipboard rejected the text.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Copies the grouped board to the clipboard and reports the result through
/// `notifier`.
///
/// # Errors
///
/// Returns [`ExportError`] when encoding or the clipboard write fails.
pub fn export_to_clipboard(
    state: &BoardState,
    clipboard: &impl ClipboardWriter,
    notifier: &impl Notifier,
) -> Result<(), ExportError> {
    let result = BoardExport::from_state(state)
        .to_pretty_json()
        .map_err(ExportError::from)
        .and_then(|text| clipboard.write_text(&text).map_err(ExportError::from));

    match &result {
        Ok(()) => notifier.notify(NoticeLevel::Success, EXPORT_SUCCESS),
        Err(error) => {
            warn!(%error, "board export failed");
            notifier.notify(NoticeLevel::Error, EXPORT_FAILURE);
        }
    }
    result
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Returns the board grouped by column title.
    #[must_use]
    pub fn export(&self) -> BoardExport<'_> {
        BoardExport::from_state(self.state())
    }
}
