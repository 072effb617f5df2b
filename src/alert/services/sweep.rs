//! Daily sweep over every task inside the alert window.

use super::{AlertService, AlertServiceError, SkipReason};
use crate::alert::{domain::AlertWindow, ports::AlertRepository};
use crate::task::{
    domain::TaskId,
    ports::{TaskSource, TaskSourceError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// A task whose alert attempt failed during a sweep.
#[derive(Debug)]
pub struct SweepFailure {
    /// Task that could not be processed.
    pub task_id: TaskId,
    /// Failure returned by the writer.
    pub error: AlertServiceError,
}

/// Tally of one sweep run.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Tasks returned by the window query.
    pub examined: usize,
    /// Alerts written.
    pub created: usize,
    /// Tasks that already had an alert for the day.
    pub skipped_existing: usize,
    /// Tasks the policy placed outside the window.
    pub skipped_out_of_window: usize,
    /// Tasks whose alert attempt failed.
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    /// Returns `true` when every examined task was processed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Errors that abort a sweep before any task is processed.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The window query failed.
    #[error(transparent)]
    TaskSource(#[from] TaskSourceError),
}

/// Re-evaluates every task due inside the alert window.
pub struct SweepService<T, A, C>
where
    T: TaskSource,
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    alerts: AlertService<A, C>,
}

impl<T, A, C> Clone for SweepService<T, A, C>
where
    T: TaskSource,
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            alerts: self.alerts.clone(),
        }
    }
}

impl<T, A, C> SweepService<T, A, C>
where
    T: TaskSource,
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new sweep service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, alerts: AlertService<A, C>) -> Self {
        Self { tasks, alerts }
    }

    /// Runs one sweep for `today`.
    ///
    /// Tasks are processed sequentially. A failing task is recorded in the
    /// report and the sweep moves on to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::TaskSource`] when the window query fails.
    pub async fn run(&self, today: NaiveDate) -> Result<SweepReport, SweepError> {
        let window = AlertWindow::starting(today);
        let due_tasks = self.tasks.find_due_within(window.due_range()).await?;

        let mut report = SweepReport {
            examined: due_tasks.len(),
            ..SweepReport::default()
        };

        for task in &due_tasks {
            match self.alerts.ensure_alert(task, today).await {
                Ok(outcome) => match outcome.skip_reason() {
                    None => report.created += 1,
                    Some(SkipReason::AlreadyExists) => report.skipped_existing += 1,
                    Some(SkipReason::OutOfWindow) => report.skipped_out_of_window += 1,
                },
                Err(error) => {
                    tracing::warn!(task_id = %task.id(), %error, "alert sweep task failed");
                    report.failures.push(SweepFailure {
                        task_id: task.id(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            %today,
            examined = report.examined,
            created = report.created,
            skipped_existing = report.skipped_existing,
            skipped_out_of_window = report.skipped_out_of_window,
            failed = report.failures.len(),
            "alert sweep complete"
        );
        Ok(report)
    }
}
