//! In-memory task store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order, which is the order `find_all` reports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.tasks
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.tasks
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

fn position_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn find_all(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        if position_of(&tasks, task.id()).is_some() {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn replace(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        let stored = tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        let position = position_of(&tasks, id).ok_or(TaskStoreError::NotFound(id))?;
        tasks.remove(position);
        Ok(())
    }
}
