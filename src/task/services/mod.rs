//! Application services for the task list.

mod board;
mod lifecycle;
mod sync;

pub use board::{TaskBoard, TaskBoardError, TaskBoardResult};
pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
pub use sync::{TaskSyncError, TaskSyncResult, TaskSyncService, enrich_tasks};
