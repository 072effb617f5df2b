//! Diesel row models for alert persistence.

use super::schema::alerts;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for alert records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = alerts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AlertRow {
    /// Alert identifier.
    pub id: uuid::Uuid,
    /// Originating task.
    pub task_id: uuid::Uuid,
    /// Task owner.
    pub owner_id: uuid::Uuid,
    /// Calendar day the alert is for.
    pub alert_date: NaiveDate,
    /// Alert text.
    pub message: String,
    /// Alert tier.
    pub category: String,
    /// Alert severity.
    pub severity: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for alert records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = alerts)]
pub struct NewAlertRow {
    /// Alert identifier.
    pub id: uuid::Uuid,
    /// Originating task.
    pub task_id: uuid::Uuid,
    /// Task owner.
    pub owner_id: uuid::Uuid,
    /// Calendar day the alert is for.
    pub alert_date: NaiveDate,
    /// Alert text.
    pub message: String,
    /// Alert tier.
    pub category: String,
    /// Alert severity.
    pub severity: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
