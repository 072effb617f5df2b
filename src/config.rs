//! Runtime configuration for the alert sweeper.
//!
//! Values come from `STUDYMATE_*` environment variables. Parsing goes
//! through [`StudyMateConfig::from_lookup`] so callers and tests can supply
//! any key source.

use chrono::NaiveTime;
use thiserror::Error;

/// Postgres connection URL.
pub const DATABASE_URL_VAR: &str = "STUDYMATE_DATABASE_URL";
/// Maximum r2d2 pool size.
pub const POOL_SIZE_VAR: &str = "STUDYMATE_DB_POOL_SIZE";
/// Whether the daily scheduler runs.
pub const SWEEP_ENABLED_VAR: &str = "STUDYMATE_SWEEP_ENABLED";
/// UTC time of day for the sweep, `HH:MM`.
pub const SWEEP_AT_VAR: &str = "STUDYMATE_SWEEP_AT";
/// Whether a sweep runs once at startup.
pub const SWEEP_ON_STARTUP_VAR: &str = "STUDYMATE_SWEEP_ON_STARTUP";

const DEFAULT_POOL_SIZE: u32 = 4;
const MAX_POOL_SIZE: u32 = 64;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Scheduling settings for the daily sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Whether the daily scheduler runs.
    pub enabled: bool,
    /// UTC time of day the sweep fires.
    pub run_at: NaiveTime,
    /// Whether to sweep once immediately at startup.
    pub run_on_startup: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            run_at: NaiveTime::MIN,
            run_on_startup: false,
        }
    }
}

/// Complete sweeper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyMateConfig {
    /// Postgres connection URL.
    pub database_url: String,
    /// Maximum connections in the pool.
    pub pool_size: u32,
    /// Sweep scheduling.
    pub sweep: SweepConfig,
}

impl StudyMateConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value
    /// fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let pool_size = lookup(POOL_SIZE_VAR)
            .map_or(Ok(DEFAULT_POOL_SIZE), |raw| parse_pool_size(&raw))?;

        let defaults = SweepConfig::default();
        let sweep = SweepConfig {
            enabled: lookup(SWEEP_ENABLED_VAR)
                .map_or(Ok(defaults.enabled), |raw| parse_flag(SWEEP_ENABLED_VAR, &raw))?,
            run_at: lookup(SWEEP_AT_VAR)
                .map_or(Ok(defaults.run_at), |raw| parse_time_of_day(&raw))?,
            run_on_startup: lookup(SWEEP_ON_STARTUP_VAR).map_or(
                Ok(defaults.run_on_startup),
                |raw| parse_flag(SWEEP_ON_STARTUP_VAR, &raw),
            )?,
        };

        Ok(Self {
            database_url,
            pool_size,
            sweep,
        })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
            reason: "expected true or false",
        }),
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: POOL_SIZE_VAR,
        value: raw.to_owned(),
        reason: "expected an integer between 1 and 64",
    };
    let size = raw.trim().parse::<u32>().map_err(|_| invalid())?;
    if size == 0 || size > MAX_POOL_SIZE {
        return Err(invalid());
    }
    Ok(size)
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| ConfigError::InvalidValue {
        key: SWEEP_AT_VAR,
        value: raw.to_owned(),
        reason: "expected HH:MM in UTC",
    })
}
