//! In-memory task source for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{DueRange, DueTask, TaskId},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
///
/// Writes are exposed so callers can stand in for the task store's
/// create and update paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    tasks: Arc<RwLock<HashMap<TaskId, DueTask>>>,
}

impl InMemoryTaskSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Persistence`] when the lock is poisoned.
    pub fn upsert(&self, task: DueTask) -> TaskSourceResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.insert(task.id(), task);
        Ok(())
    }

    /// Removes a task, returning it when present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Persistence`] when the lock is poisoned.
    pub fn remove(&self, id: TaskId) -> TaskSourceResult<Option<DueTask>> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        Ok(tasks.remove(&id))
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> TaskSourceError {
    TaskSourceError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn find_due_within(&self, range: DueRange) -> TaskSourceResult<Vec<DueTask>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks
            .values()
            .filter(|task| range.contains(task.due_at()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskSourceResult<Option<DueTask>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }
}
