//! When steps for drag reordering BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::when;

fn hover(world: &mut DragWorld, active: &str, over: &str) {
    if !world.drag.is_dragging() {
        world.drag.drag_start(&mut world.store, active);
    }
    world.drag.drag_over(&mut world.store, active, Some(over));
}

#[when(r#"task "{active}" is dragged over task "{target}""#)]
fn dragged_over_task(
    world: &mut DragWorld,
    active: String,
    target: String,
) -> Result<(), eyre::Report> {
    let active_id = world.id_of(&active)?;
    let target_id = world.id_of(&target)?;
    hover(world, &active_id, &target_id);
    Ok(())
}

#[when(r#"task "{active}" is dragged over column "{column}""#)]
fn dragged_over_column(
    world: &mut DragWorld,
    active: String,
    column: String,
) -> Result<(), eyre::Report> {
    let active_id = world.id_of(&active)?;
    hover(world, &active_id, &column);
    Ok(())
}

#[when("the task is released outside any column")]
fn released_outside(world: &mut DragWorld) -> Result<(), eyre::Report> {
    let active = world
        .drag
        .active_id()
        .map(|id| id.as_str().to_owned())
        .ok_or_else(|| eyre::eyre!("no drag in progress"))?;
    world.drag.drag_end(&mut world.store, &active, None);
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut DragWorld) -> Result<(), eyre::Report> {
    if !world.drag.cancel(&mut world.store) {
        return Err(eyre::eyre!("no drag in progress to cancel"));
    }
    Ok(())
}
