//! View state for the task board.

use super::{AccountAddress, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Mutually exclusive board modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Task list is shown. Entering this mode always resyncs.
    ViewTasks,
    /// Task creation form is shown.
    CreateTask,
}

impl ViewMode {
    /// Returns the canonical mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewTasks => "view-tasks",
            Self::CreateTask => "create-task",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of the outstanding request behind a board mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum Activity {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed.
    Failed(String),
}

impl Activity {
    /// Records a failure, keeping the error's display text.
    #[must_use]
    pub fn failed(err: &impl std::error::Error) -> Self {
        Self::Failed(err.to_string())
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Immutable copy of the board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Current mode.
    pub mode: ViewMode,
    /// Task list from the last successful resync.
    pub tasks: Vec<Task>,
    /// Activity of the task list resync.
    pub list_activity: Activity,
    /// Activity of the create form.
    pub create_activity: Activity,
    /// Tasks whose delete is in flight.
    pub deletes_in_flight: BTreeSet<TaskId>,
    /// Active wallet account, if connected.
    pub account: Option<AccountAddress>,
}

impl BoardSnapshot {
    /// Returns `true` when the delete affordance for `id` is enabled.
    #[must_use]
    pub fn is_delete_enabled(&self, id: TaskId) -> bool {
        !self.deletes_in_flight.contains(&id)
    }

    /// Returns `true` when a wallet account is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}
