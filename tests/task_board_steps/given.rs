//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use rollup_todo::task::domain::{ChainTaskRecord, TaskId, ViewMode};
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"the contract holds task {id:u64} titled "{title}" at "{path}""#)]
fn contract_holds_task(
    world: &mut TaskBoardWorld,
    id: u64,
    title: String,
    path: String,
) -> Result<(), eyre::Report> {
    world
        .chain
        .seed_task(ChainTaskRecord::new(
            TaskId::from_chain(u128::from(id)),
            title,
            path,
        ))
        .wrap_err("seed contract task")
}

#[given(r#"the content store describes "{path}" as "{description}""#)]
fn content_store_describes(
    world: &mut TaskBoardWorld,
    path: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .content
        .insert_document(&path, json!({ "description": description }))
        .wrap_err("seed description document")
}

#[given("the content store rejects uploads")]
fn content_store_rejects_uploads(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world
        .content
        .reject_uploads(true)
        .wrap_err("configure upload rejection")
}

#[given("the wallet rejects signatures")]
fn wallet_rejects_signatures(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world
        .chain
        .reject_signatures(true)
        .wrap_err("configure signature rejection")
}

#[given("the board is in create-task mode")]
fn board_in_create_task_mode(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.show(ViewMode::CreateTask)).wrap_err("switch to create-task mode")
}

#[given("the board has loaded the task list")]
fn board_has_loaded_task_list(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.show(ViewMode::ViewTasks)).wrap_err("initial resync")
}
