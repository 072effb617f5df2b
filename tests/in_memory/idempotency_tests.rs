//! One alert per task and day, across repeated calls and callers.

use super::helpers::{AlertHarness, reference_day};
use chrono::Duration;
use rstest::{fixture, rstest};
use studymate::alert::{
    domain::AlertCategory,
    ports::AlertRepository,
    services::{EnsureOutcome, SkipReason},
};
use studymate::task::domain::TaskPriority;

#[fixture]
fn harness() -> AlertHarness {
    AlertHarness::on(reference_day(), 9)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_alert_twice_yields_one_alert(harness: AlertHarness) {
    let task = harness.add_task("Physics homework", 2, TaskPriority::Medium);

    harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("first ensure should succeed");
    let second = harness
        .writer
        .ensure_alert(&task, harness.today)
        .await
        .expect("second ensure should succeed");

    assert_eq!(second, EnsureOutcome::Skipped(SkipReason::AlreadyExists));
    assert_eq!(harness.alert_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn trigger_then_sweep_same_day_yields_one_alert(harness: AlertHarness) {
    let task = harness.add_task("Biology poster", 3, TaskPriority::High);

    let triggered = harness
        .writer
        .on_due_date_established(&task)
        .await
        .expect("trigger should succeed");
    let report = harness
        .sweep
        .run(harness.today)
        .await
        .expect("sweep should succeed");

    assert!(triggered.created().is_some());
    assert_eq!(report.created, 0);
    assert_eq!(report.skipped_existing, 1);
    assert_eq!(harness.alert_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rescheduled_task_is_not_alerted_twice_on_the_same_day(harness: AlertHarness) {
    let task = harness.add_task("Coding assignment", 5, TaskPriority::Low);
    harness
        .writer
        .on_due_date_established(&task)
        .await
        .expect("trigger should succeed");

    let original_due_at = task.due_at();
    let moved = task.with_due_at(original_due_at - Duration::days(4));
    harness
        .tasks
        .upsert(moved.clone())
        .expect("update should succeed");
    let outcome = harness
        .writer
        .on_due_date_established(&moved)
        .await
        .expect("trigger should succeed");

    assert_eq!(outcome, EnsureOutcome::Skipped(SkipReason::AlreadyExists));
    let alerts = harness
        .alerts
        .find_by_task(moved.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(alerts.len(), 1);
    assert!(
        alerts
            .iter()
            .all(|alert| alert.category() == AlertCategory::Reminder)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moved_into_window_is_alerted_immediately(harness: AlertHarness) {
    let task = harness.add_task("Group presentation", 12, TaskPriority::Medium);
    let before = harness
        .writer
        .on_due_date_established(&task)
        .await
        .expect("trigger should succeed");

    let original_due_at = task.due_at();
    let moved = task.with_due_at(original_due_at - Duration::days(11));
    harness
        .tasks
        .upsert(moved.clone())
        .expect("update should succeed");
    let after = harness
        .writer
        .on_due_date_established(&moved)
        .await
        .expect("trigger should succeed");

    assert_eq!(before, EnsureOutcome::Skipped(SkipReason::OutOfWindow));
    assert_eq!(
        after.created().map(|alert| alert.category()),
        Some(AlertCategory::Warning)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn daily_sweeps_raise_one_alert_per_day_until_due() {
    let first_day = reference_day();
    let setup = AlertHarness::on(first_day, 0);
    let task = setup.add_task("Capstone report", 3, TaskPriority::Low);

    let mut alerted_days = Vec::new();
    for offset in 0..=4 {
        let today = first_day + Duration::days(offset);
        setup
            .sweep
            .run(today)
            .await
            .expect("sweep should succeed");
        setup
            .sweep
            .run(today)
            .await
            .expect("repeat sweep should succeed");
        if setup
            .alerts
            .exists_for_day(task.id(), today)
            .await
            .expect("check should succeed")
        {
            alerted_days.push(today);
        }
    }

    let alerts = setup
        .alerts
        .find_by_task(task.id())
        .await
        .expect("lookup should succeed");
    let kinds: Vec<_> = alerts.iter().rev().map(|alert| alert.category()).collect();
    assert_eq!(alerted_days.len(), 4);
    assert_eq!(
        kinds,
        vec![
            AlertCategory::Reminder,
            AlertCategory::Warning,
            AlertCategory::Warning,
            AlertCategory::Urgent,
        ]
    );
}
