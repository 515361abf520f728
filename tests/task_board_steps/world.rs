//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rollup_todo::task::{
    adapters::memory::{InMemoryChain, InMemoryContentStore, StaticWallet},
    domain::{AccountAddress, TransactionReceipt},
    services::{TaskBoard, TaskBoardResult, TaskLifecycleService, TaskSyncService},
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<
    InMemoryChain,
    InMemoryContentStore,
    InMemoryChain,
    InMemoryContentStore,
    StaticWallet,
    DefaultClock,
>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub chain: InMemoryChain,
    pub content: InMemoryContentStore,
    pub board: TestBoard,
    pub last_create: Option<TaskBoardResult<TransactionReceipt>>,
    pub last_delete: Option<TaskBoardResult<TransactionReceipt>>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty contract with a connected wallet.
    #[must_use]
    pub fn new() -> Self {
        let chain = InMemoryChain::new();
        let content = InMemoryContentStore::new();
        let sync = TaskSyncService::new(Arc::new(chain.clone()), Arc::new(content.clone()));
        let lifecycle = TaskLifecycleService::new(
            Arc::new(chain.clone()),
            Arc::new(content.clone()),
            Arc::new(StaticWallet::connected(AccountAddress::from_bytes([0x33; 20]))),
            Arc::new(DefaultClock),
        );

        Self {
            chain,
            content,
            board: TaskBoard::new(sync, lifecycle),
            last_create: None,
            last_delete: None,
        }
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
