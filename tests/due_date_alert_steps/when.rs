//! When steps for due-date alert BDD scenarios.

use super::world::{AlertWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the daily sweep runs")]
fn daily_sweep_runs(world: &mut AlertWorld) -> Result<(), eyre::Report> {
    let report = run_async(world.sweep.run(world.today)).wrap_err("run daily sweep")?;
    if !report.is_clean() {
        return Err(eyre::eyre!("sweep reported failures: {:?}", report.failures));
    }
    Ok(())
}

#[when("the due date is established")]
fn due_date_established(world: &mut AlertWorld) -> Result<(), eyre::Report> {
    let task = world.task()?.clone();
    run_async(world.writer.on_due_date_established(&task))
        .wrap_err("trigger alert for established due date")?;
    Ok(())
}
