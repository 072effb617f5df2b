//! Due-dated task view.

use super::{TaskDomainError, TaskId, TaskPriority, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task as seen by the alerting policy.
///
/// The wider application guarantees every task carries a due date; a task
/// without one never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTask {
    id: TaskId,
    owner_id: UserId,
    title: String,
    due_at: DateTime<Utc>,
    priority: TaskPriority,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning student account.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted due timestamp.
    pub due_at: DateTime<Utc>,
    /// Persisted priority.
    pub priority: TaskPriority,
}

impl DueTask {
    /// Creates a new task view with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        owner_id: UserId,
        title: impl Into<String>,
        due_at: DateTime<Utc>,
        priority: TaskPriority,
    ) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            id: TaskId::new(),
            owner_id,
            title: trimmed.to_owned(),
            due_at,
            priority,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            due_at: data.due_at,
            priority: data.priority,
        }
    }

    /// Returns a copy of this task with a different due timestamp.
    #[must_use]
    pub fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = due_at;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the UTC calendar day the task is due.
    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_at.date_naive()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}
