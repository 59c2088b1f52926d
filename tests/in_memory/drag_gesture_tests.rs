//! In-memory integration tests for complete drag gestures.

use eyre::{OptionExt, ensure};
use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    config::{BoardConfig, DragPersistence},
    domain::ColumnDropPolicy,
    services::{DragController, DragEvent},
};

use super::helpers::{backend, column_titles, create_tasks, open_store};

fn over(active: &str, target: &str) -> DragEvent {
    DragEvent::Over {
        active: active.to_owned(),
        over: Some(target.to_owned()),
    }
}

fn end(active: &str, target: Option<&str>) -> DragEvent {
    DragEvent::End {
        active: active.to_owned(),
        over: target.map(str::to_owned),
    }
}

#[rstest]
fn dragging_across_columns_lands_next_to_hovered_card(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    let ids = create_tasks(
        &mut store,
        &[("x", "todo"), ("y", "done"), ("z", "done")],
    )?;
    let [x, _, z] = ids.as_slice() else {
        eyre::bail!("expected three tasks");
    };
    let mut drag = DragController::new();

    drag.handle(&mut store, &DragEvent::Start { active: x.clone() });
    drag.handle(&mut store, &over(x, "in-progress"));
    drag.handle(&mut store, &over(x, z));
    drag.handle(&mut store, &end(x, Some(z)));

    ensure!(column_titles(&store, "done") == ["y", "z", "x"]);
    ensure!(column_titles(&store, "in-progress").is_empty());
    ensure!(!drag.is_dragging());

    let reopened = open_store(&backend, BoardConfig::default());
    ensure!(column_titles(&reopened, "done") == ["y", "z", "x"]);
    Ok(())
}

#[rstest]
fn released_outside_keeps_last_hover_result(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    let ids = create_tasks(&mut store, &[("a", "todo"), ("b", "review")])?;
    let a = ids.first().ok_or_eyre("task a")?;
    let mut drag = DragController::new();

    drag.handle(&mut store, &DragEvent::Start { active: a.clone() });
    drag.handle(&mut store, &over(a, "review"));
    drag.handle(&mut store, &end(a, None));

    ensure!(column_titles(&store, "review") == ["a", "b"]);
    Ok(())
}

#[rstest]
fn escape_restores_the_pre_drag_board(backend: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut store = open_store(&backend, BoardConfig::default());
    let ids = create_tasks(&mut store, &[("a", "todo"), ("b", "todo"), ("c", "done")])?;
    let (a, c) = (
        ids.first().ok_or_eyre("task a")?,
        ids.get(2).ok_or_eyre("task c")?,
    );
    let before = store.state().clone();
    let mut drag = DragController::new();

    drag.handle(&mut store, &DragEvent::Start { active: a.clone() });
    drag.handle(&mut store, &over(a, c));
    drag.handle(&mut store, &DragEvent::Cancel);

    ensure!(store.state() == &before, "cancel should restore the board");
    let reopened = open_store(&backend, BoardConfig::default());
    ensure!(reopened.state() == &before, "storage should hold the restored board");
    Ok(())
}

#[rstest]
fn append_policy_drops_to_bottom_of_column(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let config = BoardConfig::default().with_column_drop(ColumnDropPolicy::AppendToColumn);
    let mut store = open_store(&backend, config);
    let ids = create_tasks(
        &mut store,
        &[("a", "todo"), ("d1", "done"), ("d2", "done")],
    )?;
    let a = ids.first().ok_or_eyre("task a")?;
    let mut drag = DragController::new();

    drag.handle(&mut store, &DragEvent::Start { active: a.clone() });
    drag.handle(&mut store, &end(a, Some("done")));

    ensure!(column_titles(&store, "done") == ["d1", "d2", "a"]);
    Ok(())
}

#[rstest]
fn on_drop_persistence_writes_once_per_gesture(
    backend: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let config = BoardConfig::default().with_drag_persistence(DragPersistence::OnDrop);
    let mut store = open_store(&backend, config);
    let ids = create_tasks(
        &mut store,
        &[("a", "todo"), ("b", "todo"), ("c", "todo"), ("d", "todo")],
    )?;
    let a = ids.first().ok_or_eyre("task a")?;
    let writes_before = backend.write_count();
    let mut drag = DragController::new();

    drag.handle(&mut store, &DragEvent::Start { active: a.clone() });
    for target in ids.iter().skip(1) {
        drag.handle(&mut store, &over(a, target));
    }
    ensure!(backend.write_count() == writes_before, "drag-over should not write");

    drag.handle(&mut store, &end(a, ids.last().map(String::as_str)));

    ensure!(backend.write_count() == writes_before + 2);
    let reopened = open_store(&backend, BoardConfig::default());
    ensure!(column_titles(&reopened, "todo") == ["b", "c", "d", "a"]);
    Ok(())
}
