//! Service layer for resynchronising the task list from the chain.

use crate::task::{
    domain::{ChainTaskRecord, Task},
    ports::{ChainError, ChainReader, ContentFetcher},
};
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned while resynchronising the task list.
#[derive(Debug, Clone, Error)]
pub enum TaskSyncError {
    /// The contract's enumeration call failed.
    #[error("could not enumerate tasks: {0}")]
    Enumeration(#[source] ChainError),
}

/// Result type for sync operations.
pub type TaskSyncResult<T> = Result<T, TaskSyncError>;

/// Projects raw records into tasks and resolves every description.
///
/// Lookups run concurrently. The returned list keeps the order of
/// `records` regardless of completion order. A lookup that fails leaves
/// that task's description unresolved; it never drops the task or fails the
/// batch.
pub async fn enrich_tasks<F>(records: Vec<ChainTaskRecord>, fetcher: &F) -> Vec<Task>
where
    F: ContentFetcher + ?Sized,
{
    let lookups = records.into_iter().map(|record| async move {
        let task = Task::from_record(record);
        let resolved = match fetcher.fetch_description(task.description()).await {
            Ok(description) => description,
            Err(err) => {
                warn!(
                    task_id = %task.id(),
                    path = %task.description(),
                    error = %err,
                    "description lookup failed, leaving it unresolved"
                );
                None
            }
        };
        task.with_task_description(resolved)
    });
    join_all(lookups).await
}

/// Task list resync service.
#[derive(Clone)]
pub struct TaskSyncService<R, F>
where
    R: ChainReader,
    F: ContentFetcher,
{
    reader: Arc<R>,
    fetcher: Arc<F>,
}

impl<R, F> TaskSyncService<R, F>
where
    R: ChainReader,
    F: ContentFetcher,
{
    /// Creates a new sync service.
    #[must_use]
    pub const fn new(reader: Arc<R>, fetcher: Arc<F>) -> Self {
        Self { reader, fetcher }
    }

    /// Reads every task from the chain and resolves its description.
    ///
    /// The result is a complete replacement list; callers swap it in
    /// wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSyncError::Enumeration`] when the chain read fails.
    /// Description lookups never fail the call.
    pub async fn load_tasks(&self) -> TaskSyncResult<Vec<Task>> {
        let records = self
            .reader
            .fetch_tasks()
            .await
            .map_err(TaskSyncError::Enumeration)?;
        debug!(count = records.len(), "fetched task records");
        Ok(enrich_tasks(records, &*self.fetcher).await)
    }
}
