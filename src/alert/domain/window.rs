//! The active alert window.

use super::ALERT_LOOKAHEAD_DAYS;
use crate::task::domain::DueRange;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Calendar days `[today, today + ALERT_LOOKAHEAD_DAYS]`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertWindow {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl AlertWindow {
    /// Builds the window that starts on `today`.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        let last_day = today
            .checked_add_days(Days::new(u64::from(ALERT_LOOKAHEAD_DAYS)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            first_day: today,
            last_day,
        }
    }

    /// Returns the first day of the window.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the last day of the window.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns `true` when `day` lies inside the window.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first_day <= day && day <= self.last_day
    }

    /// Returns midnight UTC at the start of the first day.
    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.first_day.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns midnight UTC after the last day, the exclusive upper bound.
    #[must_use]
    pub fn ends_before(&self) -> DateTime<Utc> {
        let day_after = self.last_day.succ_opt().unwrap_or(self.last_day);
        day_after.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the due timestamp range covered by the window.
    #[must_use]
    pub fn due_range(&self) -> DueRange {
        DueRange::new(self.starts_at(), self.ends_before())
    }
}
