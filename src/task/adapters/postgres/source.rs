//! `PostgreSQL` task source implementation.

use super::{models::TaskRow, schema::tasks};
use crate::task::{
    domain::{DueRange, DueTask, PersistedTaskData, TaskId, TaskPriority, UserId},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task source.
#[derive(Debug, Clone)]
pub struct PostgresTaskSource {
    pool: TaskPgPool,
}

impl PostgresTaskSource {
    /// Creates a new source from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskSourceResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskSourceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskSourceError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskSourceError::persistence)?
    }
}

#[async_trait]
impl TaskSource for PostgresTaskSource {
    async fn find_due_within(&self, range: DueRange) -> TaskSourceResult<Vec<DueTask>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::due_date.ge(range.starts_at()))
                .filter(tasks::due_date.lt(range.ends_before()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskSourceError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskSourceResult<Option<DueTask>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskSourceError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskSourceResult<DueTask> {
    let TaskRow {
        id,
        user_id,
        title,
        due_date,
        priority: persisted_priority,
    } = row;

    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskSourceError::persistence)?;

    Ok(DueTask::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner_id: UserId::from_uuid(user_id),
        title,
        due_at: due_date,
        priority,
    }))
}
