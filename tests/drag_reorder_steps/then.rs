//! Then steps for drag reordering BDD scenarios.

use super::world::{DragWorld, split_list, titles};
use rstest_bdd_macros::then;
use taskboard::board::{
    config::BoardConfig,
    services::{BoardPersistence, BoardStore},
};

#[then(r#"column "{column}" lists "{expected}""#)]
fn column_lists(world: &DragWorld, column: String, expected: String) -> Result<(), eyre::Report> {
    let actual = titles(world.store.tasks_in_column(&column));
    let wanted = split_list(&expected);
    if actual != wanted {
        return Err(eyre::eyre!(
            "column {column}: expected {wanted:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" is in column "{column}""#)]
fn task_in_column(world: &DragWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let task = world
        .store
        .task(&id)
        .ok_or_else(|| eyre::eyre!("task {title} missing from board"))?;
    if task.column().as_str() != column {
        return Err(eyre::eyre!(
            "expected {title} in {column}, found {}",
            task.column()
        ));
    }
    Ok(())
}

#[then(r#"the global order is "{expected}""#)]
fn global_order(world: &DragWorld, expected: String) -> Result<(), eyre::Report> {
    let actual = titles(world.store.tasks());
    let wanted = split_list(&expected);
    if actual != wanted {
        return Err(eyre::eyre!("expected order {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the stored board matches the board")]
fn stored_board_matches(world: &DragWorld) -> Result<(), eyre::Report> {
    let reopened = BoardStore::open(
        BoardPersistence::new(world.backend.clone()),
        std::sync::Arc::new(mockable::DefaultClock),
        BoardConfig::default(),
    );
    if reopened.state() != world.store.state() {
        return Err(eyre::eyre!("stored board differs from the in-memory board"));
    }
    Ok(())
}
