//! Top-level task operations.

use super::{CreateTaskRequest, TaskServiceError, TaskServiceResult, UpdateTaskRequest};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskStore,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Create, read, update, and delete operations on whole tasks.
pub struct TaskRepository<S>
where
    S: TaskStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> TaskRepository<S>
where
    S: TaskStore + ?Sized,
{
    /// Creates a new task repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns every task in storage-native order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the store fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.store.find_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no such task exists.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        load_task(&*self.store, id).await
    }

    /// Validates `request`, assigns a fresh identifier, and stores the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when validation fails or
    /// [`TaskServiceError::Storage`] when the store rejects the write.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let task = Task::create(request.into_new_task()?);
        self.store.insert(&task).await?;
        info!(task_id = %task.id(), name = %task.name(), "task created");
        Ok(task)
    }

    /// Merges the fields present in `request` into the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no such task exists,
    /// [`TaskServiceError::InvalidInput`] when a supplied field is invalid,
    /// or [`TaskServiceError::Storage`] when the store fails.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = load_task(&*self.store, id).await?;
        task.apply(request.into_update()?);
        self.store.replace(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Deletes the task with `id` together with all of its unit tests.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no such task exists,
    /// including when it has already been deleted.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.store.delete_by_id(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}

/// Loads a task, mapping absence to [`TaskServiceError::TaskNotFound`].
pub(super) async fn load_task<S>(store: &S, id: TaskId) -> TaskServiceResult<Task>
where
    S: TaskStore + ?Sized,
{
    store
        .find_by_id(id)
        .await?
        .ok_or(TaskServiceError::TaskNotFound(id))
}
