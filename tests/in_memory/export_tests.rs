//! In-memory integration tests for board export.

use eyre::{OptionExt, ensure};
use rstest::rstest;
use serde_json::Value;
use taskboard::board::{
    adapters::memory::{InMemoryClipboard, InMemoryKeyValueStore, RecordingNotifier},
    config::BoardConfig,
    ports::NoticeLevel,
    services::export_to_clipboard,
};

use super::helpers::{backend, create_tasks, open_store};

#[rstest]
fn export_copies_grouped_board(backend: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    create_tasks(&mut store, &[("first", "done"), ("second", "todo")])?;
    let clipboard = InMemoryClipboard::new();
    let notifier = RecordingNotifier::new();

    export_to_clipboard(store.state(), &clipboard, &notifier)?;

    let text = clipboard.contents().ok_or_eyre("clipboard is empty")?;
    let value: Value = serde_json::from_str(&text)?;
    let groups = value.as_array().ok_or_eyre("export is a JSON array")?;
    ensure!(groups.len() == 4);
    ensure!(value.pointer("/0/column") == Some(&Value::from("To Do")));
    ensure!(value.pointer("/0/tasks/0/title") == Some(&Value::from("second")));
    ensure!(value.pointer("/3/tasks/0/title") == Some(&Value::from("first")));
    ensure!(notifier.notices().first().map(|(level, _)| *level) == Some(NoticeLevel::Success));
    Ok(())
}

#[rstest]
fn denied_clipboard_leaves_board_intact(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    create_tasks(&mut store, &[("first", "todo")])?;
    let notifier = RecordingNotifier::new();

    let result = export_to_clipboard(store.state(), &InMemoryClipboard::denied(), &notifier);

    ensure!(result.is_err());
    ensure!(
        notifier.notices()
            == vec![(NoticeLevel::Error, "Failed to export tasks".to_owned())]
    );
    ensure!(store.tasks().len() == 1);
    Ok(())
}
