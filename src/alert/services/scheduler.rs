//! Timer that fires the alert sweep once per day.

use super::{SweepError, SweepReport, SweepService};
use crate::alert::ports::AlertRepository;
use crate::task::ports::TaskSource;
use chrono::{DateTime, Days, NaiveTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const MIN_DELAY: Duration = Duration::from_secs(1);

/// Returns the first `run_at` (UTC) strictly after `now`.
#[must_use]
pub fn next_run_after(now: DateTime<Utc>, run_at: NaiveTime) -> DateTime<Utc> {
    let today_run = now.date_naive().and_time(run_at).and_utc();
    if today_run > now {
        return today_run;
    }
    today_run
        .checked_add_days(Days::new(1))
        .unwrap_or(today_run)
}

/// Returns how long to wait from `now` until the next `run_at` (UTC).
///
/// The result is strictly in the future: when `now` is exactly `run_at` the
/// next run is a day later. Never shorter than one second.
#[must_use]
pub fn duration_until_next_run(now: DateTime<Utc>, run_at: NaiveTime) -> Duration {
    (next_run_after(now, run_at) - now)
        .to_std()
        .map_or(MIN_DELAY, |delay| delay.max(MIN_DELAY))
}

/// Drives [`SweepService::run`] at a fixed UTC time of day.
pub struct SweepScheduler<T, A, C>
where
    T: TaskSource,
    A: AlertRepository,
    C: Clock + Send + Sync,
{
    sweep: SweepService<T, A, C>,
    clock: Arc<C>,
    run_at: NaiveTime,
}

impl<T, A, C> SweepScheduler<T, A, C>
where
    T: TaskSource + 'static,
    A: AlertRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a scheduler firing daily at `run_at` UTC.
    #[must_use]
    pub const fn new(sweep: SweepService<T, A, C>, clock: Arc<C>, run_at: NaiveTime) -> Self {
        Self {
            sweep,
            clock,
            run_at,
        }
    }

    /// Returns the configured time of day.
    #[must_use]
    pub const fn run_at(&self) -> NaiveTime {
        self.run_at
    }

    /// Runs a single sweep for the clock's current UTC day.
    ///
    /// # Errors
    ///
    /// Propagates [`SweepError`] from [`SweepService::run`].
    pub async fn run_once(&self) -> Result<SweepReport, SweepError> {
        let today = self.clock.utc().date_naive();
        self.sweep.run(today).await
    }

    /// Spawns the daily loop; it exits when `shutdown` fires or closes.
    ///
    /// Each run sweeps the day it was scheduled for, not the day the clock
    /// reads on wake-up.
    pub fn spawn(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let now = self.clock.utc();
                let next_run = next_run_after(now, self.run_at);
                let delay = duration_until_next_run(now, self.run_at);
                tracing::info!(
                    sleep_seconds = delay.as_secs(),
                    %next_run,
                    "alert sweep scheduled"
                );

                tokio::select! {
                    _ = shutdown.recv() => {
                        tracing::info!("alert sweep scheduler shutting down");
                        break;
                    }
                    () = tokio::time::sleep(delay) => {
                        if let Err(err) = self.sweep.run(next_run.date_naive()).await {
                            tracing::warn!(error = %err, "alert sweep failed");
                        }
                    }
                }
            }
        })
    }
}
