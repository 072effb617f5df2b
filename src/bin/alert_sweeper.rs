//! Runs the StudyMate due-date alert sweep.
//!
//! Usage:
//!
//! ```text
//! studymate-alert-sweeper [--once]
//! ```
//!
//! With `--once` a single sweep runs for the current UTC day and the process
//! exits. Otherwise the daily scheduler runs until Ctrl-C. Configuration is
//! read from `STUDYMATE_*` environment variables; see
//! [`studymate::config::StudyMateConfig`].

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use studymate::alert::{
    adapters::postgres::PostgresAlertRepository,
    services::{AlertService, SweepScheduler, SweepService},
};
use studymate::config::StudyMateConfig;
use studymate::task::adapters::postgres::PostgresTaskSource;
use studymate::telemetry::init_tracing;
use thiserror::Error;
use tokio::sync::broadcast;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while starting the sweeper.
#[derive(Debug, Error)]
enum SweeperError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to build connection pool: {0}")]
    Pool(#[source] diesel::r2d2::PoolError),
    #[error("sweep completed with {0} failed task(s)")]
    PartialSweep(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Once,
    Scheduled,
}

impl Mode {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, SweeperError> {
        let mode = match args.next().as_deref() {
            None => Self::Scheduled,
            Some("--once") => Self::Once,
            Some(other) => {
                return Err(SweeperError::InvalidArgs(format!(
                    "unknown argument '{other}'; expected --once or nothing"
                )));
            }
        };
        if let Some(extra) = args.next() {
            return Err(SweeperError::InvalidArgs(format!(
                "unexpected extra argument '{extra}'"
            )));
        }
        Ok(mode)
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let mode = Mode::from_args(std::env::args().skip(1))?;
    let config = StudyMateConfig::from_env()?;

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .build(ConnectionManager::<PgConnection>::new(&config.database_url))
        .map_err(SweeperError::Pool)?;

    let clock = Arc::new(DefaultClock);
    let alerts = AlertService::new(
        Arc::new(PostgresAlertRepository::new(pool.clone())),
        Arc::clone(&clock),
    );
    let sweep = SweepService::new(Arc::new(PostgresTaskSource::new(pool)), alerts);
    let scheduler = SweepScheduler::new(sweep, clock, config.sweep.run_at);

    if mode == Mode::Once {
        let report = scheduler.run_once().await?;
        if !report.is_clean() {
            return Err(SweeperError::PartialSweep(report.failures.len()).into());
        }
        return Ok(());
    }

    if config.sweep.run_on_startup {
        if let Err(err) = scheduler.run_once().await {
            tracing::warn!(error = %err, "startup alert sweep failed");
        }
    }

    if !config.sweep.enabled {
        tracing::info!("alert sweep scheduler disabled by configuration");
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let handle = scheduler.spawn(shutdown_rx);

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");
    if shutdown_tx.send(()).is_err() {
        tracing::debug!("alert sweep scheduler already stopped");
    }
    handle.await?;
    Ok(())
}
