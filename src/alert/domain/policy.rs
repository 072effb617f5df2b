//! Due-date alert policy.
//!
//! [`classify`] maps a task and the current calendar day to an optional
//! alert. Tiers are an ordered rule table evaluated top to bottom; the first
//! rule whose day limit covers the distance to the due date wins.

use super::{AlertCategory, Severity};
use crate::task::domain::DueTask;
use chrono::NaiveDate;

/// Number of days ahead of the due date during which alerts are raised.
pub const ALERT_LOOKAHEAD_DAYS: u32 = 5;

/// Outcome of classifying a task that falls inside the alert window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertClassification {
    /// Human-readable alert text.
    pub message: String,
    /// Tier the task falls into.
    pub category: AlertCategory,
    /// Severity after applying the task priority.
    pub severity: Severity,
    /// Whole days from today to the due date.
    pub days_until_due: u32,
}

struct TierRule {
    max_days: u32,
    category: AlertCategory,
}

const TIER_RULES: [TierRule; 3] = [
    TierRule {
        max_days: 0,
        category: AlertCategory::Urgent,
    },
    TierRule {
        max_days: 2,
        category: AlertCategory::Warning,
    },
    TierRule {
        max_days: ALERT_LOOKAHEAD_DAYS,
        category: AlertCategory::Reminder,
    },
];

/// Returns the signed number of calendar days from `today` to `due_date`.
#[must_use]
pub fn days_until_due(due_date: NaiveDate, today: NaiveDate) -> i64 {
    due_date.signed_duration_since(today).num_days()
}

/// Classifies a task for alerting on `today`.
///
/// Returns `None` when the task is overdue or due more than
/// [`ALERT_LOOKAHEAD_DAYS`] days from now.
#[must_use]
pub fn classify(task: &DueTask, today: NaiveDate) -> Option<AlertClassification> {
    let days = u32::try_from(days_until_due(task.due_date(), today)).ok()?;
    let rule = TIER_RULES.iter().find(|rule| days <= rule.max_days)?;
    let escalated = task.priority().is_high();

    let base_severity = rule.category.base_severity();
    let severity = if escalated {
        base_severity.escalated()
    } else {
        base_severity
    };

    Some(AlertClassification {
        message: render_message(rule.category, days, task.title(), escalated),
        category: rule.category,
        severity,
        days_until_due: days,
    })
}

fn render_message(category: AlertCategory, days: u32, title: &str, escalated: bool) -> String {
    match (category, escalated) {
        (AlertCategory::Urgent, true) => format!("HIGH PRIORITY: \"{title}\" is due today!"),
        (AlertCategory::Urgent, false) => format!("\"{title}\" is due today."),
        (AlertCategory::Warning, true) => {
            format!("HIGH PRIORITY: \"{title}\" is {}.", due_phrase(days))
        }
        (AlertCategory::Warning, false) => format!("\"{title}\" is {}.", due_phrase(days)),
        (AlertCategory::Reminder, true) => format!(
            "Important: \"{title}\" is {}. Start working on it soon.",
            due_phrase(days)
        ),
        (AlertCategory::Reminder, false) => {
            format!("Reminder: \"{title}\" is {}.", due_phrase(days))
        }
    }
}

fn due_phrase(days: u32) -> String {
    match days {
        0 => "due today".to_owned(),
        1 => "due tomorrow".to_owned(),
        n => format!("due in {n} days"),
    }
}
