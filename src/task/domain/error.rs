//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not an unsigned decimal integer.
    #[error("invalid task identifier '{0}', expected an unsigned decimal integer")]
    InvalidTaskId(String),

    /// The account address is not a `0x`-prefixed 20-byte hex value.
    #[error("invalid account address '{0}', expected 0x followed by 40 hex digits")]
    InvalidAccountAddress(String),

    /// The transaction hash is not a `0x`-prefixed 32-byte hex value.
    #[error("invalid transaction hash '{0}', expected 0x followed by 64 hex digits")]
    InvalidTransactionHash(String),
}
