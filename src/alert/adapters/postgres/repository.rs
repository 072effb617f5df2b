//! `PostgreSQL` repository implementation for alert storage.

use super::{
    models::{AlertRow, NewAlertRow},
    schema::alerts,
};
use crate::alert::{
    domain::{Alert, AlertCategory, AlertId, PersistedAlertData, Severity},
    ports::{AlertRepository, AlertRepositoryError, AlertRepositoryResult, InsertOutcome},
};
use crate::task::domain::{TaskId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by alert adapters.
pub type AlertPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed alert repository.
///
/// Relies on the `idx_alerts_task_day_unique` index over
/// `(task_id, alert_date)`; inserts use `ON CONFLICT DO NOTHING` against it.
#[derive(Debug, Clone)]
pub struct PostgresAlertRepository {
    pool: AlertPgPool,
}

impl PostgresAlertRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AlertPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AlertRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AlertRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AlertRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AlertRepositoryError::persistence)?
    }
}

#[async_trait]
impl AlertRepository for PostgresAlertRepository {
    async fn exists_for_day(
        &self,
        task_id: TaskId,
        day: NaiveDate,
    ) -> AlertRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                alerts::table
                    .filter(alerts::task_id.eq(task_id.into_inner()))
                    .filter(alerts::alert_date.eq(day)),
            ))
            .get_result::<bool>(connection)
            .map_err(AlertRepositoryError::persistence)
        })
        .await
    }

    async fn insert_if_absent(&self, alert: &Alert) -> AlertRepositoryResult<InsertOutcome> {
        let alert_id = alert.id();
        let new_row = to_new_row(alert);

        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(alerts::table)
                .values(&new_row)
                .on_conflict((alerts::task_id, alerts::alert_date))
                .do_nothing()
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AlertRepositoryError::DuplicateAlert(alert_id)
                    }
                    _ => AlertRepositoryError::persistence(err),
                })?;

            if inserted == 0 {
                return Ok(InsertOutcome::AlreadyPresent);
            }
            Ok(InsertOutcome::Inserted)
        })
        .await
    }

    async fn find_by_task(&self, task_id: TaskId) -> AlertRepositoryResult<Vec<Alert>> {
        self.run_blocking(move |connection| {
            let rows = alerts::table
                .filter(alerts::task_id.eq(task_id.into_inner()))
                .order(alerts::alert_date.desc())
                .select(AlertRow::as_select())
                .load::<AlertRow>(connection)
                .map_err(AlertRepositoryError::persistence)?;
            rows.into_iter().map(row_to_alert).collect()
        })
        .await
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
        limit: usize,
    ) -> AlertRepositoryResult<Vec<Alert>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = alerts::table
                .filter(alerts::owner_id.eq(owner_id.into_inner()))
                .order(alerts::created_at.desc())
                .limit(row_limit)
                .select(AlertRow::as_select())
                .load::<AlertRow>(connection)
                .map_err(AlertRepositoryError::persistence)?;
            rows.into_iter().map(row_to_alert).collect()
        })
        .await
    }
}

fn to_new_row(alert: &Alert) -> NewAlertRow {
    NewAlertRow {
        id: alert.id().into_inner(),
        task_id: alert.task_id().into_inner(),
        owner_id: alert.owner_id().into_inner(),
        alert_date: alert.alert_date(),
        message: alert.message().to_owned(),
        category: alert.category().as_str().to_owned(),
        severity: alert.severity().as_str().to_owned(),
        created_at: alert.created_at(),
    }
}

fn row_to_alert(row: AlertRow) -> AlertRepositoryResult<Alert> {
    let AlertRow {
        id,
        task_id,
        owner_id,
        alert_date,
        message,
        category: persisted_category,
        severity: persisted_severity,
        created_at,
    } = row;

    let category = AlertCategory::try_from(persisted_category.as_str())
        .map_err(AlertRepositoryError::persistence)?;
    let severity = Severity::try_from(persisted_severity.as_str())
        .map_err(AlertRepositoryError::persistence)?;

    Ok(Alert::from_persisted(PersistedAlertData {
        id: AlertId::from_uuid(id),
        task_id: TaskId::from_uuid(task_id),
        owner_id: UserId::from_uuid(owner_id),
        alert_date,
        message,
        category,
        severity,
        created_at,
    }))
}
