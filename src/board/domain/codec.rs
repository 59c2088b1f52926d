//! Text codec for board state.
//!
//! Encoding is plain `serde_json`. Decoding is total: input that is not a
//! JSON array (or board object) decodes to an empty value, and records that
//! fail to decode inside an otherwise valid array are skipped, so callers
//! never have to guard against a failing decoder.

use super::{BoardCodecError, BoardState, Column, Task};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Encodes the whole board as one JSON document.
///
/// # Errors
///
/// Returns [`BoardCodecError::Encode`] if JSON encoding fails.
pub fn serialize_board(board: &BoardState) -> Result<String, BoardCodecError> {
    Ok(serde_json::to_string(board)?)
}

/// Decodes a board written by [`serialize_board`].
///
/// Malformed or empty input yields an empty board.
#[must_use]
pub fn deserialize_board(text: &str) -> BoardState {
    let Some(Value::Object(mut fields)) = parse_value(text, "board") else {
        return BoardState::empty();
    };
    let tasks = fields
        .remove("tasks")
        .map(|value| decode_records(value, "task"))
        .unwrap_or_default();
    let columns = fields
        .remove("columns")
        .map(|value| decode_records(value, "column"))
        .unwrap_or_default();
    BoardState::new(tasks, columns)
}

/// Encodes the task list.
///
/// # Errors
///
/// Returns [`BoardCodecError::Encode`] if JSON encoding fails.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, BoardCodecError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decodes a task list. Malformed input yields an empty list.
#[must_use]
pub fn deserialize_tasks(text: &str) -> Vec<Task> {
    parse_value(text, "task list")
        .map(|value| decode_records(value, "task"))
        .unwrap_or_default()
}

/// Encodes the column list.
///
/// # Errors
///
/// Returns [`BoardCodecError::Encode`] if JSON encoding fails.
pub fn serialize_columns(columns: &[Column]) -> Result<String, BoardCodecError> {
    Ok(serde_json::to_string(columns)?)
}

/// Decodes a column list. Malformed input yields an empty list.
#[must_use]
pub fn deserialize_columns(text: &str) -> Vec<Column> {
    parse_value(text, "column list")
        .map(|value| decode_records(value, "column"))
        .unwrap_or_default()
}

fn parse_value(text: &str, what: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "discarding malformed {what}");
            None
        }
    }
}

fn decode_records<T: DeserializeOwned>(value: Value, what: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        warn!("expected a JSON array of {what} records");
        return Vec::new();
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(index, %error, "skipping unreadable {what} record");
                None
            }
        })
        .collect()
}
