//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rollup_todo::task::{
    domain::{Activity, TaskId, ViewMode},
    services::{TaskBoardError, TaskLifecycleError},
};
use rstest_bdd_macros::then;

fn parse_mode(name: &str) -> Result<ViewMode, eyre::Report> {
    match name {
        "view-tasks" => Ok(ViewMode::ViewTasks),
        "create-task" => Ok(ViewMode::CreateTask),
        other => Err(eyre::eyre!("unknown mode in scenario: {other}")),
    }
}

#[then("the board is in {mode} mode")]
fn board_is_in_mode(world: &TaskBoardWorld, mode: String) -> Result<(), eyre::Report> {
    let expected = parse_mode(&mode)?;
    let snapshot = world.board.snapshot()?;
    if snapshot.mode != expected {
        return Err(eyre::eyre!(
            "expected mode {expected}, found {}",
            snapshot.mode
        ));
    }
    Ok(())
}

#[then("the board lists {count} task")]
fn board_lists_tasks(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot()?;
    if snapshot.tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks, found {}",
            snapshot.tasks.len()
        ));
    }
    Ok(())
}

#[then(r#"task {id:u64} is described as "{description}""#)]
fn task_is_described_as(
    world: &TaskBoardWorld,
    id: u64,
    description: String,
) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot()?;
    let task_id = TaskId::from_chain(u128::from(id));
    let task = snapshot
        .tasks
        .iter()
        .find(|task| task.id() == task_id)
        .ok_or_else(|| eyre::eyre!("task {task_id} is not listed"))?;
    if task.task_description() != Some(description.as_str()) {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            task.task_description()
        ));
    }
    Ok(())
}

#[then(r#"exactly one task is titled "{title}""#)]
fn exactly_one_task_titled(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot()?;
    let matching = snapshot
        .tasks
        .iter()
        .filter(|task| task.title() == title)
        .count();
    if matching != 1 {
        return Err(eyre::eyre!(
            "expected one task titled {title:?}, found {matching}"
        ));
    }
    Ok(())
}

#[then("the create form shows a failure")]
fn create_form_shows_failure(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot()?;
    if !matches!(snapshot.create_activity, Activity::Failed(_)) {
        return Err(eyre::eyre!(
            "expected failed create activity, found {:?}",
            snapshot.create_activity
        ));
    }
    let result = world
        .last_create
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    if !matches!(
        result,
        Err(TaskBoardError::Lifecycle(TaskLifecycleError::Upload(_)))
    ) {
        return Err(eyre::eyre!("expected upload error, got {result:?}"));
    }
    Ok(())
}

#[then("no transaction was submitted")]
fn no_transaction_submitted(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let submitted = world.chain.submitted_transactions()?;
    if submitted != 0 {
        return Err(eyre::eyre!("expected no transactions, found {submitted}"));
    }
    Ok(())
}

#[then("the delete fails at submission")]
fn delete_fails_at_submission(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delete result"))?;
    if !matches!(
        result,
        Err(TaskBoardError::Lifecycle(TaskLifecycleError::Submission(_)))
    ) {
        return Err(eyre::eyre!("expected submission error, got {result:?}"));
    }
    Ok(())
}

#[then("the delete affordance for task {id:u64} is enabled")]
fn delete_affordance_enabled(world: &TaskBoardWorld, id: u64) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot()?;
    let task_id = TaskId::from_chain(u128::from(id));
    if !snapshot.is_delete_enabled(task_id) {
        return Err(eyre::eyre!("delete affordance for task {task_id} is disabled"));
    }
    Ok(())
}
