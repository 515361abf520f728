//! Shared test helpers for in-memory task list integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rollup_todo::task::{
    adapters::memory::{InMemoryChain, InMemoryContentStore, StaticWallet},
    domain::{AccountAddress, ChainTaskRecord, TaskId},
    services::{TaskBoard, TaskLifecycleService, TaskSyncService},
};
use rstest::fixture;
use serde_json::json;

/// Account used to sign every mutation in these tests.
pub const ACCOUNT: AccountAddress = AccountAddress::from_bytes([0x22; 20]);

/// Sync service over the in-memory adapters.
pub type TestSync = TaskSyncService<InMemoryChain, InMemoryContentStore>;

/// Lifecycle service over the in-memory adapters.
pub type TestLifecycle =
    TaskLifecycleService<InMemoryChain, InMemoryContentStore, StaticWallet, DefaultClock>;

/// Board over the in-memory adapters.
pub type TestBoard = TaskBoard<
    InMemoryChain,
    InMemoryContentStore,
    InMemoryChain,
    InMemoryContentStore,
    StaticWallet,
    DefaultClock,
>;

/// In-memory chain and content store sharing state with the services
/// built from them.
pub struct Backend {
    /// Contract state.
    pub chain: InMemoryChain,
    /// Content documents.
    pub content: InMemoryContentStore,
}

impl Backend {
    /// Builds a sync service over this backend.
    #[must_use]
    pub fn sync(&self) -> TestSync {
        TaskSyncService::new(Arc::new(self.chain.clone()), Arc::new(self.content.clone()))
    }

    /// Builds a lifecycle service signing as [`ACCOUNT`].
    #[must_use]
    pub fn lifecycle(&self) -> TestLifecycle {
        TaskLifecycleService::new(
            Arc::new(self.chain.clone()),
            Arc::new(self.content.clone()),
            Arc::new(StaticWallet::connected(ACCOUNT)),
            Arc::new(DefaultClock),
        )
    }

    /// Builds a board signing as [`ACCOUNT`].
    #[must_use]
    pub fn board(&self) -> TestBoard {
        TaskBoard::new(self.sync(), self.lifecycle())
    }
}

/// Provides a backend holding "Buy milk" with its description.
#[fixture]
pub fn backend() -> Backend {
    let chain = InMemoryChain::with_tasks([ChainTaskRecord::new(
        TaskId::from_chain(1),
        "Buy milk",
        "ref/1",
    )]);
    let content = InMemoryContentStore::new();
    content
        .insert_document("ref/1/", json!({ "description": "2% milk, 1 gallon" }))
        .expect("seed description");
    Backend { chain, content }
}
