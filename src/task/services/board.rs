//! Task board: view mode, displayed task list, and per-task affordances.

use super::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, TaskSyncError, TaskSyncService,
};
use crate::task::{
    domain::{Activity, BoardSnapshot, Task, TaskId, TransactionReceipt, ViewMode},
    ports::{ChainReader, ChainWriter, ContentFetcher, ContentStore, WalletProvider},
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by board operations.
#[derive(Debug, Clone, Error)]
pub enum TaskBoardError {
    /// Resync failed.
    #[error(transparent)]
    Sync(#[from] TaskSyncError),
    /// A create or delete flow failed.
    #[error(transparent)]
    Lifecycle(#[from] TaskLifecycleError),
    /// A delete for this task is already in flight.
    #[error("delete already in flight for task {0}")]
    DeleteInFlight(TaskId),
    /// A create is already in flight.
    #[error("task creation already in flight")]
    CreateInFlight,
    /// The board state lock was poisoned.
    #[error("board state lock poisoned: {0}")]
    StatePoisoned(String),
}

/// Result type for board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

#[derive(Debug)]
struct BoardState {
    mode: ViewMode,
    tasks: Vec<Task>,
    list_activity: Activity,
    create_activity: Activity,
    deletes_in_flight: BTreeSet<TaskId>,
    /// Bumped whenever a resync starts; only the latest one may apply.
    resync_generation: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            mode: ViewMode::ViewTasks,
            tasks: Vec::new(),
            list_activity: Activity::Idle,
            create_activity: Activity::Idle,
            deletes_in_flight: BTreeSet::new(),
            resync_generation: 0,
        }
    }
}

/// Owns the displayed task list and drives every flow that changes it.
///
/// The list is only ever replaced by a successful resync. State sits behind
/// a lock that is never held across an await, so several deletes may be in
/// flight at once.
pub struct TaskBoard<R, F, W, S, A, C>
where
    R: ChainReader,
    F: ContentFetcher,
    W: ChainWriter,
    S: ContentStore,
    A: WalletProvider,
    C: Clock + Send + Sync,
{
    sync: TaskSyncService<R, F>,
    lifecycle: TaskLifecycleService<W, S, A, C>,
    state: RwLock<BoardState>,
}

impl<R, F, W, S, A, C> TaskBoard<R, F, W, S, A, C>
where
    R: ChainReader,
    F: ContentFetcher,
    W: ChainWriter,
    S: ContentStore,
    A: WalletProvider,
    C: Clock + Send + Sync,
{
    /// Creates a board in `view-tasks` mode with an empty list.
    ///
    /// Call [`Self::show`] with [`ViewMode::ViewTasks`] for the initial
    /// resync.
    #[must_use]
    pub fn new(sync: TaskSyncService<R, F>, lifecycle: TaskLifecycleService<W, S, A, C>) -> Self {
        Self {
            sync,
            lifecycle,
            state: RwLock::new(BoardState::default()),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut BoardState) -> T) -> TaskBoardResult<T> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskBoardError::StatePoisoned(err.to_string()))?;
        Ok(f(&mut state))
    }

    /// Returns a copy of the current board state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> TaskBoardResult<BoardSnapshot> {
        let account = self.lifecycle.active_account();
        let state = self
            .state
            .read()
            .map_err(|err| TaskBoardError::StatePoisoned(err.to_string()))?;
        Ok(BoardSnapshot {
            mode: state.mode,
            tasks: state.tasks.clone(),
            list_activity: state.list_activity.clone(),
            create_activity: state.create_activity.clone(),
            deletes_in_flight: state.deletes_in_flight.clone(),
            account,
        })
    }

    /// Switches mode. Entering [`ViewMode::ViewTasks`] always resyncs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Sync`] when the resync fails. The mode
    /// still changes and the previous list stays displayed.
    pub async fn show(&self, mode: ViewMode) -> TaskBoardResult<()> {
        self.with_state(|state| state.mode = mode)?;
        if mode == ViewMode::ViewTasks {
            self.resync().await?;
        }
        Ok(())
    }

    async fn resync(&self) -> TaskBoardResult<()> {
        let generation = self.with_state(|state| {
            state.resync_generation = state.resync_generation.wrapping_add(1);
            state.list_activity = Activity::Loading;
            state.resync_generation
        })?;
        let loaded = self.sync.load_tasks().await;
        self.with_state(|state| {
            if state.resync_generation != generation {
                debug!(generation, "discarding superseded task resync");
                return;
            }
            match &loaded {
                Ok(tasks) => {
                    state.tasks.clone_from(tasks);
                    state.list_activity = Activity::Idle;
                }
                Err(err) => state.list_activity = Activity::failed(err),
            }
        })?;
        if let Err(err) = loaded {
            warn!(error = %err, "task resync failed");
            return Err(err.into());
        }
        Ok(())
    }

    /// Runs the create flow, then switches to `view-tasks` and resyncs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::CreateInFlight`] while another create is
    /// running, and [`TaskBoardError::Lifecycle`] when the flow fails; the
    /// mode is then left unchanged and the create activity records the
    /// failure.
    pub async fn create_task(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> TaskBoardResult<TransactionReceipt> {
        self.with_state(|state| {
            if state.create_activity.is_loading() {
                return Err(TaskBoardError::CreateInFlight);
            }
            state.create_activity = Activity::Loading;
            Ok(())
        })??;

        let request = CreateTaskRequest::new(title, description);
        match self.lifecycle.create_task(request).await {
            Ok(receipt) => {
                self.with_state(|state| state.create_activity = Activity::Idle)?;
                self.show(ViewMode::ViewTasks).await?;
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "task creation failed");
                self.with_state(|state| state.create_activity = Activity::failed(&err))?;
                Err(err.into())
            }
        }
    }

    /// Runs the delete flow for `id`, then switches to `view-tasks` and
    /// resyncs.
    ///
    /// The delete affordance for `id` is disabled while the flow runs and
    /// re-enabled when it ends, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::DeleteInFlight`] when a delete for `id` is
    /// already running, and [`TaskBoardError::Lifecycle`] when the flow
    /// fails; the displayed list is then left unchanged.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<TransactionReceipt> {
        self.with_state(|state| {
            if !state.deletes_in_flight.insert(id) {
                return Err(TaskBoardError::DeleteInFlight(id));
            }
            Ok(())
        })??;

        let result = self.lifecycle.delete_task(id).await;
        self.with_state(|state| state.deletes_in_flight.remove(&id))?;

        match result {
            Ok(receipt) => {
                self.show(ViewMode::ViewTasks).await?;
                Ok(receipt)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task deletion failed");
                Err(err.into())
            }
        }
    }
}
