//! Due-date alerting for StudyMate tasks.
//!
//! Tasks due within the next five days receive at most one alert per
//! calendar day. Alerts are produced by a daily sweep and by an on-demand
//! trigger that runs whenever a task's due date is set or changed. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the pure alert policy in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Writer, sweep, and scheduling services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
