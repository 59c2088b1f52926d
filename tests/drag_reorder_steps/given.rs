//! Given steps for drag reordering BDD scenarios.

use super::world::{DragWorld, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::TaskDraft;

fn add_tasks(world: &mut DragWorld, titles: &str, column: &str) -> Result<(), eyre::Report> {
    for title in split_list(titles) {
        let created = world
            .store
            .create_task(TaskDraft::new(title.as_str()).with_column(column))
            .wrap_err_with(|| format!("create task {title} in {column}"))?;
        world
            .ids_by_title
            .insert(title, created.id().as_str().to_owned());
    }
    Ok(())
}

#[given(r#"a board with tasks "{titles}" in column "{column}""#)]
fn board_with_tasks(
    world: &mut DragWorld,
    titles: String,
    column: String,
) -> Result<(), eyre::Report> {
    add_tasks(world, &titles, &column)
}

#[given(r#"tasks "{titles}" in column "{column}""#)]
fn more_tasks(world: &mut DragWorld, titles: String, column: String) -> Result<(), eyre::Report> {
    add_tasks(world, &titles, &column)
}
