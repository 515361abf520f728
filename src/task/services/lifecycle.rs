//! Service layer for creating and deleting on-chain tasks.

use crate::task::{
    domain::{AccountAddress, ContentEntry, TaskId, TransactionHash, TransactionReceipt},
    ports::{ChainError, ChainWriter, ContentError, ContentStore, WalletProvider},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request.
    ///
    /// Empty values are passed through; the contract decides whether to
    /// accept them.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Service-level errors for task mutations.
///
/// Each variant names the step that failed so callers can tell an upload
/// problem from a rejected signature or a reverted transaction.
#[derive(Debug, Clone, Error)]
pub enum TaskLifecycleError {
    /// No wallet account is connected.
    #[error("no wallet account is connected")]
    WalletNotConnected,
    /// The description could not be uploaded.
    #[error("description upload failed: {0}")]
    Upload(#[source] ContentError),
    /// The transaction could not be submitted.
    #[error("transaction submission failed: {0}")]
    Submission(#[source] ChainError),
    /// The transaction was not confirmed successfully.
    #[error("transaction confirmation failed: {0}")]
    Confirmation(#[source] ChainError),
}

/// Result type for task lifecycle operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task mutation orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<W, S, A, C>
where
    W: ChainWriter,
    S: ContentStore,
    A: WalletProvider,
    C: Clock + Send + Sync,
{
    writer: Arc<W>,
    content_store: Arc<S>,
    wallet: Arc<A>,
    clock: Arc<C>,
}

impl<W, S, A, C> TaskLifecycleService<W, S, A, C>
where
    W: ChainWriter,
    S: ContentStore,
    A: WalletProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(writer: Arc<W>, content_store: Arc<S>, wallet: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            writer,
            content_store,
            wallet,
            clock,
        }
    }

    /// Returns the active wallet account, if any.
    #[must_use]
    pub fn active_account(&self) -> Option<AccountAddress> {
        self.wallet.active_account()
    }

    fn require_account(&self) -> TaskLifecycleResult<AccountAddress> {
        self.active_account()
            .ok_or(TaskLifecycleError::WalletNotConnected)
    }

    /// Uploads the description, submits `createTask`, and waits for
    /// confirmation.
    ///
    /// The new task is not visible until the caller resyncs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::WalletNotConnected`] before any side
    /// effect when no account is connected, otherwise the variant naming the
    /// failed step.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<TransactionReceipt> {
        let from = self.require_account()?;
        let CreateTaskRequest { title, description } = request;

        let entry = ContentEntry::description(description, &*self.clock);
        let content_path = self
            .content_store
            .upload(&entry)
            .await
            .map_err(TaskLifecycleError::Upload)?;
        info!(entry = entry.path(), path = %content_path, "uploaded task description");

        let transaction_hash = self
            .writer
            .submit_create_task(from, &title, &content_path)
            .await
            .map_err(TaskLifecycleError::Submission)?;
        info!(tx = %transaction_hash, %from, "submitted createTask");

        self.confirm(transaction_hash).await
    }

    /// Submits `deleteTask(id)` and waits for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::WalletNotConnected`] when no account is
    /// connected, otherwise the variant naming the failed step.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<TransactionReceipt> {
        let from = self.require_account()?;
        let transaction_hash = self
            .writer
            .submit_delete_task(from, id)
            .await
            .map_err(TaskLifecycleError::Submission)?;
        info!(tx = %transaction_hash, task_id = %id, %from, "submitted deleteTask");

        self.confirm(transaction_hash).await
    }

    async fn confirm(
        &self,
        transaction_hash: TransactionHash,
    ) -> TaskLifecycleResult<TransactionReceipt> {
        let receipt = self
            .writer
            .wait_for_confirmation(transaction_hash)
            .await
            .map_err(TaskLifecycleError::Confirmation)?;
        if !receipt.is_success() {
            return Err(TaskLifecycleError::Confirmation(ChainError::Reverted(
                transaction_hash,
            )));
        }
        info!(tx = %transaction_hash, block = ?receipt.block_number(), "transaction confirmed");
        Ok(receipt)
    }
}
