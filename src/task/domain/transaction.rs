//! Confirmation outcome of a submitted contract transaction.

use super::TransactionHash;
use serde::{Deserialize, Serialize};

/// Receipt observed once a transaction has been included by the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    transaction_hash: TransactionHash,
    block_number: Option<u64>,
    succeeded: bool,
}

impl TransactionReceipt {
    /// Receipt for a transaction that executed successfully.
    #[must_use]
    pub const fn succeeded(transaction_hash: TransactionHash, block_number: Option<u64>) -> Self {
        Self {
            transaction_hash,
            block_number,
            succeeded: true,
        }
    }

    /// Receipt for a transaction that was included but reverted.
    #[must_use]
    pub const fn reverted(transaction_hash: TransactionHash, block_number: Option<u64>) -> Self {
        Self {
            transaction_hash,
            block_number,
            succeeded: false,
        }
    }

    /// Returns the transaction hash.
    #[must_use]
    pub const fn transaction_hash(&self) -> TransactionHash {
        self.transaction_hash
    }

    /// Returns the including block number, when reported.
    #[must_use]
    pub const fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    /// Returns `true` when execution succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.succeeded
    }
}
