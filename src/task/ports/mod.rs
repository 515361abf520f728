//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod chain;
pub mod content;
pub mod wallet;

pub use chain::{ChainError, ChainReader, ChainResult, ChainWriter};
pub use content::{ContentError, ContentFetcher, ContentResult, ContentStore};
pub use wallet::WalletProvider;
