//! End-to-end alert scenarios across tiers.

use super::helpers::{AlertHarness, reference_day};
use rstest::{fixture, rstest};
use studymate::alert::{
    domain::{AlertCategory, Severity},
    ports::AlertRepository,
    services::{EnsureOutcome, SkipReason},
};
use studymate::task::domain::TaskPriority;

#[fixture]
fn harness() -> AlertHarness {
    AlertHarness::on(reference_day(), 7)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn high_priority_task_due_today_gets_escalated_urgent_alert(harness: AlertHarness) {
    let task = harness.add_task("Chemistry lab write-up", 0, TaskPriority::High);

    let outcome = harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("ensure should succeed");

    let alert = outcome.created().expect("alert should be created");
    assert_eq!(alert.category(), AlertCategory::Urgent);
    assert_eq!(alert.severity(), Severity::High);
    assert!(alert.message().contains("HIGH PRIORITY"));
    assert!(alert.message().contains("Chemistry lab write-up"));
    assert_eq!(harness.alert_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn low_priority_task_due_tomorrow_gets_warning(harness: AlertHarness) {
    let task = harness.add_task("History reading", 1, TaskPriority::Low);

    let outcome = harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("ensure should succeed");

    let alert = outcome.created().expect("alert should be created");
    assert_eq!(alert.category(), AlertCategory::Warning);
    assert!(alert.message().contains("tomorrow"));
    assert_eq!(harness.alert_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn low_priority_task_due_in_four_days_gets_reminder(harness: AlertHarness) {
    let task = harness.add_task("Spanish vocabulary", 4, TaskPriority::Low);

    let outcome = harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("ensure should succeed");

    let alert = outcome.created().expect("alert should be created");
    assert_eq!(alert.category(), AlertCategory::Reminder);
    assert!(alert.message().contains("in 4 days"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_due_in_ten_days_gets_no_alert(harness: AlertHarness) {
    let task = harness.add_task("Term paper", 10, TaskPriority::High);

    let outcome = harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("ensure should succeed");
    let report = harness
        .sweep
        .run(harness.today)
        .await
        .expect("sweep should succeed");

    assert_eq!(outcome, EnsureOutcome::Skipped(SkipReason::OutOfWindow));
    assert_eq!(report.examined, 0);
    assert!(
        harness
            .alerts
            .find_by_task(task.id())
            .await
            .expect("lookup should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sweep_with_no_tasks_in_window_writes_nothing(harness: AlertHarness) {
    harness.add_task("Old assignment", -3, TaskPriority::Medium);

    let report = harness
        .sweep
        .run(harness.today)
        .await
        .expect("sweep should succeed");

    assert_eq!(report.examined, 0);
    assert_eq!(report.created, 0);
    assert!(report.is_clean());
    assert_eq!(harness.alert_count(), 0);
}
