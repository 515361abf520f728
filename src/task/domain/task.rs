//! Task read projection and the raw chain record it is built from.

use super::{ContentPath, TaskId};
use serde::{Deserialize, Serialize};

/// Raw task record as returned by the contract's enumeration entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTaskRecord {
    /// Identifier assigned by the contract.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Content reference stored alongside the title.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl ChainTaskRecord {
    /// Creates a record with `completed` unset.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Task as displayed to the account holder.
///
/// Every field except `task_description` is a straight copy of the chain
/// record. `task_description` is filled by resolving `description` through
/// the content fetcher and is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: ContentPath,
    completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_description: Option<String>,
}

impl Task {
    /// Projects a raw chain record into an unresolved task.
    #[must_use]
    pub fn from_record(record: ChainTaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: ContentPath::new(record.description),
            completed: record.completed,
            task_description: None,
        }
    }

    /// Attaches resolved description text.
    #[must_use]
    pub fn with_task_description(mut self, task_description: Option<String>) -> Self {
        self.task_description = task_description;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content reference.
    #[must_use]
    pub const fn description(&self) -> &ContentPath {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the resolved description text, if resolution succeeded.
    #[must_use]
    pub fn task_description(&self) -> Option<&str> {
        self.task_description.as_deref()
    }
}
