//! Error types for alert domain parsing.

use thiserror::Error;

/// Error returned while parsing alert categories from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown alert category: {0}")]
pub struct ParseAlertCategoryError(pub String);

/// Error returned while parsing alert severities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown alert severity: {0}")]
pub struct ParseSeverityError(pub String);
