//! Half-open due timestamp range used for bulk task lookup.

use chrono::{DateTime, Utc};

/// Range of due timestamps, `starts_at <= due_at < ends_before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueRange {
    starts_at: DateTime<Utc>,
    ends_before: DateTime<Utc>,
}

impl DueRange {
    /// Creates a range. Bounds are swapped when given in reverse order.
    #[must_use]
    pub fn new(starts_at: DateTime<Utc>, ends_before: DateTime<Utc>) -> Self {
        if ends_before < starts_at {
            return Self {
                starts_at: ends_before,
                ends_before: starts_at,
            };
        }
        Self {
            starts_at,
            ends_before,
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub const fn ends_before(&self) -> DateTime<Utc> {
        self.ends_before
    }

    /// Returns `true` when `due_at` falls inside the range.
    #[must_use]
    pub fn contains(&self, due_at: DateTime<Utc>) -> bool {
        self.starts_at <= due_at && due_at < self.ends_before
    }
}
