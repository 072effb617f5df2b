//! Port contracts for reading tasks.
//!
//! Ports define infrastructure-agnostic interfaces used by alert services.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
