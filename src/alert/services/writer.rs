//! Idempotent alert writer and on-demand trigger.

use crate::alert::{
    domain::{Alert, classify},
    ports::{AlertRepository, AlertRepositoryError, InsertOutcome},
};
use crate::task::domain::{DueTask, UserId};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Why no alert was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The task is overdue or beyond the look-ahead window.
    OutOfWindow,
    /// The task already has an alert for the day.
    AlreadyExists,
}

/// Result of a single [`AlertService::ensure_alert`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// A new alert was stored.
    Created(Alert),
    /// Nothing was written.
    Skipped(SkipReason),
}

impl EnsureOutcome {
    /// Returns the created alert, if any.
    #[must_use]
    pub const fn created(&self) -> Option<&Alert> {
        match self {
            Self::Created(alert) => Some(alert),
            Self::Skipped(_) => None,
        }
    }

    /// Returns the skip reason, if nothing was written.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Created(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }
}

/// Service-level errors for alert operations.
#[derive(Debug, Error)]
pub enum AlertServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AlertRepositoryError),
}

/// Result type for alert service operations.
pub type AlertServiceResult<T> = Result<T, AlertServiceError>;

/// Creates at most one alert per task and calendar day.
pub struct AlertService<A, C>
where
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> Clone for AlertService<A, C>
where
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<A, C> AlertService<A, C>
where
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new alert service.
    #[must_use]
    pub const fn new(repository: Arc<A>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }


    /// Ensures `task` has an alert for `today` when the policy calls for one.
    ///
    /// Writes zero or one alert. Out-of-window tasks and tasks already
    /// alerted today are reported as skipped, not as errors.
    ///
    /// # Errors
    ///
    /// Returns [`AlertServiceError::Repository`] when the existence check or
    /// the insert fails. No retry is attempted.
    pub async fn ensure_alert(
        &self,
        task: &DueTask,
        today: NaiveDate,
    ) -> AlertServiceResult<EnsureOutcome> {
        let Some(classification) = classify(task, today) else {
            tracing::debug!(task_id = %task.id(), %today, "task outside alert window");
            return Ok(EnsureOutcome::Skipped(SkipReason::OutOfWindow));
        };

        if self.repository.exists_for_day(task.id(), today).await? {
            tracing::debug!(task_id = %task.id(), alert_date = %today, "alert already raised");
            return Ok(EnsureOutcome::Skipped(SkipReason::AlreadyExists));
        }

        let alert = Alert::new(task, classification, today, &*self.clock);
        match self.repository.insert_if_absent(&alert).await? {
            InsertOutcome::Inserted => {
                tracing::info!(
                    task_id = %task.id(),
                    alert_id = %alert.id(),
                    alert_date = %today,
                    category = %alert.category(),
                    severity = %alert.severity(),
                    "alert created"
                );
                Ok(EnsureOutcome::Created(alert))
            }
            InsertOutcome::AlreadyPresent => {
                tracing::debug!(
                    task_id = %task.id(),
                    alert_date = %today,
                    "concurrent writer raised the alert first"
                );
                Ok(EnsureOutcome::Skipped(SkipReason::AlreadyExists))
            }
        }
    }

    /// Runs the alert check for a task whose due date was just set or
    /// changed, using the clock's current UTC day.
    ///
    /// # Errors
    ///
    /// Propagates [`AlertServiceError`] from [`Self::ensure_alert`].
    pub async fn on_due_date_established(
        &self,
        task: &DueTask,
    ) -> AlertServiceResult<EnsureOutcome> {
        let today = self.clock.utc().date_naive();
        self.ensure_alert(task, today).await
    }

    /// Variant of [`Self::on_due_date_established`] for task create and
    /// update paths: failures are logged and swallowed so they never fail
    /// the task mutation itself.
    pub async fn notify_due_date_established(&self, task: &DueTask) -> Option<EnsureOutcome> {
        match self.on_due_date_established(task).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                tracing::warn!(task_id = %task.id(), error = %err, "on-demand alert check failed");
                None
            }
        }
    }

    /// Lists the newest alerts for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AlertServiceError::Repository`] when the lookup fails.
    pub async fn list_for_owner(
        &self,
        owner_id: UserId,
        limit: usize,
    ) -> AlertServiceResult<Vec<Alert>> {
        Ok(self.repository.list_for_owner(owner_id, limit).await?)
    }
}
