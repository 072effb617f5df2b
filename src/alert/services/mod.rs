//! Application services for alert creation and scheduling.

mod scheduler;
mod sweep;
mod writer;

pub use scheduler::{SweepScheduler, duration_until_next_run, next_run_after};
pub use sweep::{SweepError, SweepFailure, SweepReport, SweepService};
pub use writer::{AlertService, AlertServiceError, AlertServiceResult, EnsureOutcome, SkipReason};
