//! Repository port for alert persistence and lookup.

use crate::alert::domain::{Alert, AlertId};
use crate::task::domain::{TaskId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for alert repository operations.
pub type AlertRepositoryResult<T> = Result<T, AlertRepositoryError>;

/// Result of an atomic insert keyed on `(task, alert day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The alert was stored.
    Inserted,
    /// An alert for the same task and day already existed; nothing was
    /// written.
    AlreadyPresent,
}

/// Alert persistence contract.
///
/// Implementations must guarantee at most one alert per task and calendar
/// day, even when [`AlertRepository::insert_if_absent`] races with itself.
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Returns `true` when an alert exists for `task_id` on `day`.
    async fn exists_for_day(&self, task_id: TaskId, day: NaiveDate)
    -> AlertRepositoryResult<bool>;

    /// Stores `alert` unless one already exists for its task and day.
    ///
    /// # Errors
    ///
    /// Returns [`AlertRepositoryError::DuplicateAlert`] when the alert ID
    /// already exists.
    async fn insert_if_absent(&self, alert: &Alert) -> AlertRepositoryResult<InsertOutcome>;

    /// Returns all alerts raised for a task, most recent day first.
    async fn find_by_task(&self, task_id: TaskId) -> AlertRepositoryResult<Vec<Alert>>;

    /// Returns up to `limit` alerts for the owner, newest first.
    async fn list_for_owner(
        &self,
        owner_id: UserId,
        limit: usize,
    ) -> AlertRepositoryResult<Vec<Alert>>;
}

/// Errors returned by alert repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AlertRepositoryError {
    /// An alert with the same identifier already exists.
    #[error("duplicate alert identifier: {0}")]
    DuplicateAlert(AlertId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AlertRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
