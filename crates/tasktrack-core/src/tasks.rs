use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Task status lifecycle. Serialized with the same kebab-case strings the
/// CLI accepts as list filters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Wire/display form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task entity: the only persisted record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    /// New tasks always start at `todo`. Descriptions are taken as-is,
    /// including the empty string.
    pub fn new(id: u64, description: String) -> Self {
        Self {
            id,
            description,
            status: TaskStatus::Todo,
        }
    }
}

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Referenced id has no matching record. Callers treat this as a
    /// reported outcome rather than a failure.
    #[error("task not found: {id}")]
    NotFound { id: u64 },
    /// Store contents are not a valid task list encoding.
    #[error("store contents are not a valid task list: {reason}")]
    Decode { reason: String },
    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Repository contract for task persistence. Every operation is a fresh
/// load, mutate, save cycle against the backing store.
pub trait TaskRepository {
    /// All tasks in store order, or only those whose status wire string
    /// equals `filter`. An unrecognized filter yields an empty list.
    fn list(&self, filter: Option<&str>) -> Result<Vec<Task>, TaskError>;

    /// Append a new `todo` task with the next id and return it.
    fn create(&self, description: String) -> Result<Task, TaskError>;

    /// Replace the description of the task with `id`, leaving status alone.
    fn update_description(&self, id: u64, description: String) -> Result<Task, TaskError>;

    /// Remove the task with `id`. Remaining ids are untouched.
    fn delete(&self, id: u64) -> Result<(), TaskError>;

    /// Overwrite the status of the task with `id`.
    fn set_status(&self, id: u64, status: TaskStatus) -> Result<Task, TaskError>;
}
