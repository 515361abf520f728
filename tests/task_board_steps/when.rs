//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use rollup_todo::task::domain::{TaskId, ViewMode};
use rstest_bdd_macros::when;

#[when("the board shows the task list")]
fn board_shows_task_list(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.show(ViewMode::ViewTasks)).wrap_err("resync task list")
}

#[when(r#"the user creates a task titled "{title}" described as "{description}""#)]
fn user_creates_task(world: &mut TaskBoardWorld, title: String, description: String) {
    let result = run_async(world.board.create_task(title, description));
    world.last_create = Some(result);
}

#[when("the user deletes task {id:u64}")]
fn user_deletes_task(world: &mut TaskBoardWorld, id: u64) {
    let result = run_async(world.board.delete_task(TaskId::from_chain(u128::from(id))));
    world.last_delete = Some(result);
}
