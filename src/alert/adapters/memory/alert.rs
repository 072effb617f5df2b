//! In-memory repository for alert tests and embedded use.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::alert::{
    domain::{Alert, AlertId},
    ports::{AlertRepository, AlertRepositoryError, AlertRepositoryResult, InsertOutcome},
};
use crate::task::domain::{TaskId, UserId};

/// Thread-safe in-memory alert repository.
///
/// The `(task, day)` check and the insert happen under one write lock, so
/// concurrent callers can never store two alerts for the same key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlertRepository {
    state: Arc<RwLock<InMemoryAlertState>>,
}

#[derive(Debug, Default)]
struct InMemoryAlertState {
    alerts: HashMap<AlertId, Alert>,
    day_index: HashMap<(TaskId, NaiveDate), AlertId>,
}

impl InMemoryAlertRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored alerts.
    ///
    /// # Errors
    ///
    /// Returns [`AlertRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn len(&self) -> AlertRepositoryResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.alerts.len())
    }

    /// Returns `true` when no alerts are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AlertRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> AlertRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> AlertRepositoryError {
    AlertRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AlertRepository for InMemoryAlertRepository {
    async fn exists_for_day(
        &self,
        task_id: TaskId,
        day: NaiveDate,
    ) -> AlertRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.day_index.contains_key(&(task_id, day)))
    }

    async fn insert_if_absent(&self, alert: &Alert) -> AlertRepositoryResult<InsertOutcome> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.alerts.contains_key(&alert.id()) {
            return Err(AlertRepositoryError::DuplicateAlert(alert.id()));
        }

        let key = (alert.task_id(), alert.alert_date());
        if state.day_index.contains_key(&key) {
            return Ok(InsertOutcome::AlreadyPresent);
        }

        state.day_index.insert(key, alert.id());
        state.alerts.insert(alert.id(), alert.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn find_by_task(&self, task_id: TaskId) -> AlertRepositoryResult<Vec<Alert>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut found: Vec<Alert> = state
            .alerts
            .values()
            .filter(|alert| alert.task_id() == task_id)
            .cloned()
            .collect();
        found.sort_by_key(|alert| Reverse(alert.alert_date()));
        Ok(found)
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
        limit: usize,
    ) -> AlertRepositoryResult<Vec<Alert>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut found: Vec<Alert> = state
            .alerts
            .values()
            .filter(|alert| alert.owner_id() == owner_id)
            .cloned()
            .collect();
        found.sort_by_key(|alert| Reverse(alert.created_at()));
        found.truncate(limit);
        Ok(found)
    }
}
