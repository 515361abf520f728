//! Contract ports for enumerating and mutating on-chain tasks.

use crate::task::domain::{
    AccountAddress, ChainTaskRecord, ContentPath, TaskId, TransactionHash, TransactionReceipt,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contract operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Read-only contract binding.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Enumerates every task the contract currently holds.
    ///
    /// Records are returned in contract order; callers must not assume any
    /// further ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the call fails or the result cannot be
    /// decoded.
    async fn fetch_tasks(&self) -> ChainResult<Vec<ChainTaskRecord>>;
}

/// Signed contract binding.
///
/// Submission and confirmation are separate steps: a submitted transaction
/// has no effect on [`ChainReader::fetch_tasks`] until it is confirmed.
#[async_trait]
pub trait ChainWriter: Send + Sync {
    /// Submits `createTask(title, contentPath)` signed by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::SignatureRejected`] when the signer declines,
    /// or RPC and transport errors.
    async fn submit_create_task(
        &self,
        from: AccountAddress,
        title: &str,
        content_path: &ContentPath,
    ) -> ChainResult<TransactionHash>;

    /// Submits `deleteTask(id)` signed by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::SignatureRejected`] when the signer declines,
    /// or RPC and transport errors.
    async fn submit_delete_task(
        &self,
        from: AccountAddress,
        id: TaskId,
    ) -> ChainResult<TransactionHash>;

    /// Waits until the transaction is included and returns its receipt.
    ///
    /// A reverted transaction yields a receipt with
    /// [`TransactionReceipt::is_success`] returning `false`.
    ///
    /// # Errors
    ///
    /// Returns RPC, decode, and transport errors.
    async fn wait_for_confirmation(
        &self,
        transaction_hash: TransactionHash,
    ) -> ChainResult<TransactionReceipt>;
}

/// Errors returned by contract adapters.
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    /// The signer declined to sign the transaction.
    #[error("transaction signature was rejected")]
    SignatureRejected,

    /// The transaction was included but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TransactionHash),

    /// The node returned a JSON-RPC error.
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message reported by the node.
        message: String,
    },

    /// A response could not be decoded.
    #[error("could not decode contract response: {0}")]
    Decode(String),

    /// Transport-layer failure.
    #[error("chain transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChainError {
    /// Wraps a transport-layer failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
