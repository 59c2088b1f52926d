//! In-memory integration tests for board store operations.

use chrono::Utc;
use eyre::{OptionExt, ensure};
use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    config::BoardConfig,
    domain::{ColumnId, ColumnRemoval, TaskDraft, TaskPatch, TaskPriority},
};

use super::helpers::{backend, column_titles, create_tasks, open_store};

#[rstest]
fn created_task_survives_reopen(backend: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let before = Utc::now();
    let mut store = open_store(&backend, BoardConfig::default());
    let created = store.create_task(
        TaskDraft::new("Write spec")
            .with_column("todo")
            .with_tags(["docs", "docs", "planning"]),
    )?;

    ensure!(created.priority() == TaskPriority::Medium, "priority should default");
    ensure!(
        created.created_at() >= before - chrono::Duration::milliseconds(1),
        "createdAt should come from the clock"
    );

    let reopened = open_store(&backend, BoardConfig::default());
    let reloaded = reopened
        .task(created.id().as_str())
        .ok_or_eyre("created task missing after reopen")?;

    ensure!(reloaded == &created, "reloaded task differs: {reloaded:?}");
    ensure!(reloaded.tags().len() == 2, "tags should be deduplicated");
    Ok(())
}

#[rstest]
fn column_membership_follows_the_global_list(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    create_tasks(
        &mut store,
        &[("one", "todo"), ("two", "done"), ("three", "todo")],
    )?;

    ensure!(column_titles(&store, "todo") == ["one", "three"]);
    ensure!(column_titles(&store, "done") == ["two"]);
    ensure!(store.lanes().len() == 4);
    Ok(())
}

#[rstest]
fn no_op_operations_leave_storage_untouched(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    create_tasks(&mut store, &[("one", "todo")])?;
    let writes = backend.write_count();
    let snapshot = store.state().clone();

    store.update_task("nonexistent", TaskPatch::new().with_title("x"));
    store.delete_task("nonexistent");
    store.update_task("nonexistent", TaskPatch::new());

    ensure!(store.state() == &snapshot, "board changed on no-op");
    ensure!(backend.write_count() == writes, "no-op wrote to storage");
    Ok(())
}

#[rstest]
fn runtime_columns_persist_and_can_be_removed(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    let blocked = store.add_column("Blocked")?;
    let ids = create_tasks(&mut store, &[("stuck", blocked.id().as_str())])?;

    let reopened = open_store(&backend, BoardConfig::default());
    ensure!(reopened.columns().len() == 5, "added column should persist");
    ensure!(column_titles(&reopened, blocked.id().as_str()) == ["stuck"]);

    store
        .delete_column(
            blocked.id().as_str(),
            &ColumnRemoval::MoveTasksTo(ColumnId::new("in-progress")),
        )
        .ok_or_eyre("column should be removed")?;
    let stuck = ids.first().ok_or_eyre("task id")?;

    let after = open_store(&backend, BoardConfig::default());
    ensure!(after.columns().len() == 4);
    ensure!(
        after
            .task(stuck)
            .is_some_and(|task| task.column().as_str() == "in-progress"),
        "task should follow its column's replacement"
    );
    ensure!(after.state().is_consistent());
    Ok(())
}

#[rstest]
fn deleting_a_column_with_its_tasks(backend: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    create_tasks(&mut store, &[("a", "review"), ("b", "todo"), ("c", "review")])?;

    store
        .delete_column("review", &ColumnRemoval::DeleteTasks)
        .ok_or_eyre("review column exists")?;

    ensure!(store.tasks().len() == 1);
    ensure!(column_titles(&store, "todo") == ["b"]);
    Ok(())
}

#[rstest]
fn unavailable_storage_degrades_to_memory_only(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    backend.set_available(false);
    let mut store = open_store(&backend, BoardConfig::default());

    create_tasks(&mut store, &[("kept in memory", "todo")])?;

    ensure!(store.tasks().len() == 1);
    backend.set_available(true);
    ensure!(open_store(&backend, BoardConfig::default()).tasks().is_empty());
    Ok(())
}
