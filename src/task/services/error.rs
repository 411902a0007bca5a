//! Service-level errors for task and unit test operations.

use crate::task::{
    domain::{TaskDomainError, TaskId, UnitTestId},
    ports::TaskStoreError,
};
use thiserror::Error;

/// Service-level errors for task and unit test operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A required field was missing or malformed.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced unit test does not exist within the given task.
    #[error("unit test {test_id} not found in task {task_id}")]
    UnitTestNotFound {
        /// Task the lookup was scoped to.
        task_id: TaskId,
        /// Unit test that could not be resolved.
        test_id: UnitTestId,
    },

    /// The store failed or was unavailable.
    #[error(transparent)]
    Storage(TaskStoreError),
}

impl TaskServiceError {
    /// Returns `true` for either kind of unresolved reference.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_) | Self::UnitTestNotFound { .. })
    }
}

impl From<TaskStoreError> for TaskServiceError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            // The task vanished between load and persist.
            TaskStoreError::NotFound(task_id) => Self::TaskNotFound(task_id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
