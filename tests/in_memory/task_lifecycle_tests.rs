//! In-memory integration tests for the create and delete flows.

use super::helpers::{ACCOUNT, Backend, backend};
use mockable::DefaultClock;
use rollup_todo::task::{
    domain::{ContentEntry, TaskId, ViewMode},
    ports::{ChainReader, ChainWriter, ContentStore},
    services::CreateTaskRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submitted_task_is_invisible_until_confirmed(backend: Backend) -> Result<(), eyre::Report> {
    let entry = ContentEntry::description("Evening walk", &DefaultClock);
    let path = backend.content.upload(&entry).await?;
    let hash = backend
        .chain
        .submit_create_task(ACCOUNT, "Walk dog", &path)
        .await?;

    let pending = backend.sync().load_tasks().await?;
    eyre::ensure!(
        pending.iter().all(|task| task.title() != "Walk dog"),
        "task visible before confirmation"
    );

    let receipt = backend.chain.wait_for_confirmation(hash).await?;
    eyre::ensure!(receipt.is_success(), "createTask reverted");

    let confirmed = backend.sync().load_tasks().await?;
    let created: Vec<_> = confirmed
        .iter()
        .filter(|task| task.title() == "Walk dog")
        .collect();
    eyre::ensure!(created.len() == 1, "expected one new task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_stores_description_under_returned_path(
    backend: Backend,
) -> Result<(), eyre::Report> {
    backend
        .lifecycle()
        .create_task(CreateTaskRequest::new("Walk dog", "Evening walk"))
        .await?;

    let records = backend.chain.fetch_tasks().await?;
    let created = records
        .iter()
        .find(|record| record.title == "Walk dog")
        .ok_or_else(|| eyre::eyre!("created record missing"))?;
    eyre::ensure!(
        created.id == TaskId::from_chain(2),
        "ids continue after the seeded task"
    );
    let document = backend
        .content
        .document(&created.description)?
        .ok_or_else(|| eyre::eyre!("description document missing"))?;
    eyre::ensure!(
        document.get("description").and_then(serde_json::Value::as_str) == Some("Evening walk"),
        "unexpected document {document}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone_after_resync(backend: Backend) -> Result<(), eyre::Report> {
    let board = backend.board();
    board.show(ViewMode::ViewTasks).await?;

    board.delete_task(TaskId::from_chain(1)).await?;

    let snapshot = board.snapshot()?;
    eyre::ensure!(
        snapshot.tasks.iter().all(|task| task.id() != TaskId::from_chain(1)),
        "deleted task still listed"
    );
    eyre::ensure!(
        backend.chain.fetch_tasks().await?.is_empty(),
        "deleted task still on chain"
    );
    Ok(())
}
