//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::Clock;
use studymate::alert::adapters::postgres::{AlertPgPool, PostgresAlertRepository};
use studymate::task::{
    adapters::postgres::PostgresTaskSource,
    domain::{DueTask, TaskPriority, UserId},
};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// SQL creating the `tasks` table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-09-30-000000_create_tasks/up.sql");

/// SQL creating the `alerts` table and its per-day unique index.
pub const CREATE_ALERTS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_alerts/up.sql");

/// Template database name for pre-migrated schema.
pub const TEMPLATE_DB: &str = "studymate_test_template";

/// Builds the runtime used to drive async repository calls from sync tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock reading `hour:00` UTC on `day`.
    pub fn at(day: NaiveDate, hour: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
        Self(day.and_time(time).and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a task for `owner` due at `hour:00` UTC on `due_day`.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn task_due_on(
    owner: UserId,
    title: &str,
    due_day: NaiveDate,
    hour: u32,
    priority: TaskPriority,
) -> Result<DueTask, BoxError> {
    let due_at = FixedClock::at(due_day, hour).0;
    DueTask::new(owner, title, due_at, priority).map_err(|err| Box::new(err) as BoxError)
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_TASKS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_ALERTS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// A throwaway database cloned from the migrated template.
///
/// The database is dropped with the guard.
pub struct TestDatabase {
    cluster: PostgresCluster,
    name: String,
    url: String,
    pool: AlertPgPool,
}

impl TestDatabase {
    /// Creates a fresh database with the full schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if template setup, database creation, or pool
    /// construction fails.
    pub fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        let connection = cluster.connection();
        cluster.ensure_template_exists(TEMPLATE_DB, |template| {
            apply_migrations(&connection.database_url(template))
        })?;

        let name = format!("studymate_test_{}", Uuid::new_v4().simple());
        cluster.create_database_from_template(&name, TEMPLATE_DB)?;

        let url = connection.database_url(&name);
        let pool = Pool::builder()
            .max_size(4)
            .build(ConnectionManager::<PgConnection>::new(url.clone()))
            .map_err(|err| Box::new(err) as BoxError)?;

        Ok(Self {
            cluster,
            name,
            url,
            pool,
        })
    }

    /// Alert repository backed by this database.
    #[must_use]
    pub fn alerts(&self) -> PostgresAlertRepository {
        PostgresAlertRepository::new(self.pool.clone())
    }

    /// Task source backed by this database.
    #[must_use]
    pub fn tasks(&self) -> PostgresTaskSource {
        PostgresTaskSource::new(self.pool.clone())
    }

    /// Inserts `task` into the `tasks` table.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or insert fails.
    pub fn insert_task(&self, task: &DueTask) -> Result<(), BoxError> {
        let mut conn = PgConnection::establish(&self.url).map_err(|err| Box::new(err) as BoxError)?;
        diesel::sql_query(concat!(
            "INSERT INTO tasks (id, user_id, title, due_date, priority) ",
            "VALUES ($1, $2, $3, $4, $5)",
        ))
        .bind::<diesel::sql_types::Uuid, _>(task.id().into_inner())
        .bind::<diesel::sql_types::Uuid, _>(task.owner_id().into_inner())
        .bind::<diesel::sql_types::Text, _>(task.title())
        .bind::<diesel::sql_types::Timestamptz, _>(task.due_at())
        .bind::<diesel::sql_types::Text, _>(task.priority().as_str())
        .execute(&mut conn)
        .map_err(|err| Box::new(err) as BoxError)?;
        Ok(())
    }

    /// Counts rows in the `alerts` table.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or query fails.
    pub fn alert_rows(&self) -> Result<i64, BoxError> {
        #[derive(diesel::QueryableByName)]
        struct CountRow {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            total: i64,
        }

        let mut conn = PgConnection::establish(&self.url).map_err(|err| Box::new(err) as BoxError)?;
        let row = diesel::sql_query("SELECT COUNT(*) AS total FROM alerts")
            .get_result::<CountRow>(&mut conn)
            .map_err(|err| Box::new(err) as BoxError)?;
        Ok(row.total)
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}
