//! Given steps for due-date alert BDD scenarios.

use super::world::AlertWorld;
use chrono::{Duration, NaiveTime};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use studymate::task::domain::{DueTask, TaskPriority};

#[given(r#"a "{priority}" priority task "{title}" due in {days:i64} days"#)]
fn task_due_in(
    world: &mut AlertWorld,
    priority: String,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let evening = NaiveTime::from_hms_opt(18, 30, 0)
        .ok_or_else(|| eyre::eyre!("invalid due time"))?;
    let due_at = (world.today + Duration::days(days)).and_time(evening).and_utc();

    let task = DueTask::new(world.owner, title, due_at, parsed).wrap_err("build scenario task")?;
    world
        .tasks
        .upsert(task.clone())
        .wrap_err("store scenario task")?;
    world.task = Some(task);
    Ok(())
}
