//! In-memory integration tests for task list resync.

use super::helpers::{Backend, backend};
use rollup_todo::task::{
    domain::{ChainTaskRecord, TaskId},
    ports::ContentFetcher,
    services::enrich_tasks,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resync_returns_enriched_tasks(backend: Backend) -> Result<(), eyre::Report> {
    let tasks = backend.sync().load_tasks().await?;

    eyre::ensure!(tasks.len() == 1, "expected one task, found {}", tasks.len());
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == TaskId::from_chain(1), "task ID mismatch");
    eyre::ensure!(
        task.task_description() == Some("2% milk, 1 gallon"),
        "unexpected description {:?}",
        task.task_description()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_resyncs_agree(backend: Backend) -> Result<(), eyre::Report> {
    let sync = backend.sync();
    let first = sync.load_tasks().await?;
    let second = sync.load_tasks().await?;

    eyre::ensure!(first == second, "resyncs over a stable chain differ");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enrichment_accepts_trait_object_fetchers(backend: Backend) -> Result<(), eyre::Report> {
    let fetcher: &dyn ContentFetcher = &backend.content;
    let records = vec![
        ChainTaskRecord::new(TaskId::from_chain(1), "Buy milk", "ref/1"),
        ChainTaskRecord::new(TaskId::from_chain(9), "Unknown", "ref/9"),
    ];

    let tasks = enrich_tasks(records, fetcher).await;

    let descriptions: Vec<Option<&str>> =
        tasks.iter().map(|task| task.task_description()).collect();
    eyre::ensure!(
        descriptions == vec![Some("2% milk, 1 gallon"), None],
        "unexpected descriptions {descriptions:?}"
    );
    Ok(())
}
