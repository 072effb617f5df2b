//! Alert category (tier) and severity vocabulary.

use super::{ParseAlertCategoryError, ParseSeverityError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier describing how close a task is to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    /// Due today.
    Urgent,
    /// Due in one or two days.
    Warning,
    /// Due in three to five days.
    Reminder,
}

impl AlertCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Warning => "warning",
            Self::Reminder => "reminder",
        }
    }

    /// Severity of this tier for a task that is not high priority.
    #[must_use]
    pub const fn base_severity(self) -> Severity {
        match self {
            Self::Urgent => Severity::High,
            Self::Warning => Severity::Medium,
            Self::Reminder => Severity::Low,
        }
    }
}

impl TryFrom<&str> for AlertCategory {
    type Error = ParseAlertCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "urgent" => Ok(Self::Urgent),
            "warning" => Ok(Self::Warning),
            "reminder" => Ok(Self::Reminder),
            _ => Err(ParseAlertCategoryError(value.to_owned())),
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered alert severity, `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational.
    Low,
    /// Needs attention soon.
    Medium,
    /// Needs attention now.
    High,
}

impl Severity {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the next level up, saturating at [`Severity::High`].
    #[must_use]
    pub const fn escalated(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }
}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseSeverityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
