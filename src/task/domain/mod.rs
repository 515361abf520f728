//! Domain model for the on-chain task list.
//!
//! The task domain models the read projection of contract state, the content
//! entries uploaded for new tasks, transaction outcomes, and the board's
//! view state. Infrastructure concerns stay outside the domain boundary.

mod board;
mod content;
mod error;
mod ids;
mod task;
mod transaction;

pub use board::{Activity, BoardSnapshot, ViewMode};
pub use content::{ContentEntry, DescriptionDocument};
pub use error::TaskDomainError;
pub use ids::{AccountAddress, ContentPath, TaskId, TransactionHash};
pub use task::{ChainTaskRecord, Task};
pub use transaction::TransactionReceipt;
