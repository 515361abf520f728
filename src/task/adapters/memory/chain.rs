//! In-memory contract for task list tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{
        AccountAddress, ChainTaskRecord, ContentPath, TaskId, TransactionHash, TransactionReceipt,
    },
    ports::{ChainError, ChainReader, ChainResult, ChainWriter},
};

/// Thread-safe in-memory contract.
///
/// Submitted writes are staged and only applied when confirmed, so reads
/// between submission and confirmation still see the old task list. Ids are
/// assigned sequentially from one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChain {
    state: Arc<RwLock<InMemoryChainState>>,
}

#[derive(Debug, Default)]
struct InMemoryChainState {
    tasks: Vec<ChainTaskRecord>,
    last_id: u128,
    transaction_count: u64,
    block_number: u64,
    staged: HashMap<TransactionHash, StagedWrite>,
    receipts: HashMap<TransactionHash, TransactionReceipt>,
    reject_signatures: bool,
    revert_next: bool,
    fail_reads: bool,
}

#[derive(Debug, Clone)]
enum StagedWrite {
    Create { title: String, content_path: String },
    Delete { id: TaskId },
}

fn lock_error(message: String) -> ChainError {
    ChainError::transport(std::io::Error::other(message))
}

impl InMemoryChain {
    /// Creates an empty contract.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contract pre-populated with `records`.
    ///
    /// Later ids continue after the largest seeded id.
    #[must_use]
    pub fn with_tasks(records: impl IntoIterator<Item = ChainTaskRecord>) -> Self {
        let tasks: Vec<ChainTaskRecord> = records.into_iter().collect();
        let last_id = tasks
            .iter()
            .map(|record| record.id.value())
            .max()
            .unwrap_or_default();
        Self {
            state: Arc::new(RwLock::new(InMemoryChainState {
                tasks,
                last_id,
                ..InMemoryChainState::default()
            })),
        }
    }

    fn read(&self) -> ChainResult<RwLockReadGuard<'_, InMemoryChainState>> {
        self.state.read().map_err(|err| lock_error(err.to_string()))
    }

    fn write(&self) -> ChainResult<RwLockWriteGuard<'_, InMemoryChainState>> {
        self.state.write().map_err(|err| lock_error(err.to_string()))
    }

    /// Appends `record` as if it had already been confirmed on chain.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn seed_task(&self, record: ChainTaskRecord) -> ChainResult<()> {
        let mut state = self.write()?;
        state.last_id = state.last_id.max(record.id.value());
        state.tasks.push(record);
        Ok(())
    }

    /// Makes later submissions fail as if the signer declined.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn reject_signatures(&self, reject: bool) -> ChainResult<()> {
        self.write()?.reject_signatures = reject;
        Ok(())
    }

    /// Makes the next submitted transaction revert on confirmation.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn revert_next_transaction(&self) -> ChainResult<()> {
        self.write()?.revert_next = true;
        Ok(())
    }

    /// Makes task enumeration fail.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_reads(&self, fail: bool) -> ChainResult<()> {
        self.write()?.fail_reads = fail;
        Ok(())
    }

    /// Returns the number of transactions submitted so far.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn submitted_transactions(&self) -> ChainResult<u64> {
        Ok(self.read()?.transaction_count)
    }

    fn stage(&self, write: StagedWrite) -> ChainResult<TransactionHash> {
        let mut state = self.write()?;
        if state.reject_signatures {
            return Err(ChainError::SignatureRejected);
        }
        state.transaction_count += 1;
        let transaction_hash = counter_hash(state.transaction_count);
        if std::mem::take(&mut state.revert_next) {
            state.block_number += 1;
            let receipt = TransactionReceipt::reverted(transaction_hash, Some(state.block_number));
            state.receipts.insert(transaction_hash, receipt);
        } else {
            state.staged.insert(transaction_hash, write);
        }
        Ok(transaction_hash)
    }
}

/// Hash holding `counter` in its trailing bytes.
fn counter_hash(counter: u64) -> TransactionHash {
    let mut bytes = [0_u8; 32];
    let mut remaining = counter;
    for slot in bytes.iter_mut().rev().take(8) {
        *slot = u8::try_from(remaining & 0xff).unwrap_or_default();
        remaining >>= 8;
    }
    TransactionHash::from_bytes(bytes)
}

impl InMemoryChainState {
    fn apply(&mut self, write: StagedWrite) -> bool {
        match write {
            StagedWrite::Create {
                title,
                content_path,
            } => {
                self.last_id += 1;
                self.tasks.push(ChainTaskRecord::new(
                    TaskId::from_chain(self.last_id),
                    title,
                    content_path,
                ));
                true
            }
            StagedWrite::Delete { id } => {
                let before = self.tasks.len();
                self.tasks.retain(|record| record.id != id);
                self.tasks.len() != before
            }
        }
    }
}

#[async_trait]
impl ChainReader for InMemoryChain {
    async fn fetch_tasks(&self) -> ChainResult<Vec<ChainTaskRecord>> {
        let state = self.read()?;
        if state.fail_reads {
            return Err(ChainError::Rpc {
                code: -32_000,
                message: "node unavailable".to_owned(),
            });
        }
        Ok(state.tasks.clone())
    }
}

#[async_trait]
impl ChainWriter for InMemoryChain {
    async fn submit_create_task(
        &self,
        _from: AccountAddress,
        title: &str,
        content_path: &ContentPath,
    ) -> ChainResult<TransactionHash> {
        self.stage(StagedWrite::Create {
            title: title.to_owned(),
            content_path: content_path.as_str().to_owned(),
        })
    }

    async fn submit_delete_task(
        &self,
        _from: AccountAddress,
        id: TaskId,
    ) -> ChainResult<TransactionHash> {
        self.stage(StagedWrite::Delete { id })
    }

    async fn wait_for_confirmation(
        &self,
        transaction_hash: TransactionHash,
    ) -> ChainResult<TransactionReceipt> {
        let mut state = self.write()?;
        if let Some(receipt) = state.receipts.get(&transaction_hash) {
            return Ok(*receipt);
        }
        let write = state
            .staged
            .remove(&transaction_hash)
            .ok_or_else(|| ChainError::Rpc {
                code: -32_000,
                message: format!("unknown transaction {transaction_hash}"),
            })?;
        state.block_number += 1;
        let block_number = Some(state.block_number);
        let receipt = if state.apply(write) {
            TransactionReceipt::succeeded(transaction_hash, block_number)
        } else {
            TransactionReceipt::reverted(transaction_hash, block_number)
        };
        state.receipts.insert(transaction_hash, receipt);
        Ok(receipt)
    }
}
