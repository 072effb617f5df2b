//! Read port over the external task store.

use crate::task::domain::{DueRange, DueTask, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Read-only access to StudyMate tasks.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns every task whose due timestamp falls inside `range`.
    ///
    /// Ordering is unspecified.
    async fn find_due_within(&self, range: DueRange) -> TaskSourceResult<Vec<DueTask>>;

    /// Finds a single task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskSourceResult<Option<DueTask>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
