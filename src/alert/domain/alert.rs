//! Alert aggregate.

use super::{AlertCategory, AlertClassification, AlertId, Severity};
use crate::task::domain::{DueTask, TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A notification raised for one task on one calendar day.
///
/// Alerts are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    id: AlertId,
    task_id: TaskId,
    owner_id: UserId,
    alert_date: NaiveDate,
    message: String,
    category: AlertCategory,
    severity: Severity,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAlertData {
    /// Persisted alert identifier.
    pub id: AlertId,
    /// Task the alert was raised for.
    pub task_id: TaskId,
    /// Owner of that task.
    pub owner_id: UserId,
    /// Calendar day the alert is for.
    pub alert_date: NaiveDate,
    /// Alert text.
    pub message: String,
    /// Alert tier.
    pub category: AlertCategory,
    /// Alert severity.
    pub severity: Severity,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Creates an alert for `task` on `alert_date` from a policy
    /// classification.
    #[must_use]
    pub fn new(
        task: &DueTask,
        classification: AlertClassification,
        alert_date: NaiveDate,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AlertId::new(),
            task_id: task.id(),
            owner_id: task.owner_id(),
            alert_date,
            message: classification.message,
            category: classification.category,
            severity: classification.severity,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an alert from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAlertData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            owner_id: data.owner_id,
            alert_date: data.alert_date,
            message: data.message,
            category: data.category,
            severity: data.severity,
            created_at: data.created_at,
        }
    }

    /// Returns the alert identifier.
    #[must_use]
    pub const fn id(&self) -> AlertId {
        self.id
    }

    /// Returns the originating task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the owner of the originating task.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the calendar day the alert is for.
    #[must_use]
    pub const fn alert_date(&self) -> NaiveDate {
        self.alert_date
    }

    /// Returns the alert text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the alert tier.
    #[must_use]
    pub const fn category(&self) -> AlertCategory {
        self.category
    }

    /// Returns the alert severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
