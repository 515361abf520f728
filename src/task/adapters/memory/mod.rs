//! In-memory adapters for the task list ports.

mod chain;
mod content;
mod wallet;

pub use chain::InMemoryChain;
pub use content::InMemoryContentStore;
pub use wallet::StaticWallet;
