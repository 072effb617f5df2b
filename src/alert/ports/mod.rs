//! Port contracts for alert persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by alert services.

pub mod repository;

pub use repository::{AlertRepository, AlertRepositoryError, AlertRepositoryResult, InsertOutcome};
