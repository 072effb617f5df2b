//! Domain model for the task view consumed by alerting.
//!
//! Tasks are immutable from the alerting perspective: they are read, never
//! written.

mod error;
mod ids;
mod priority;
mod range;
mod task;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use priority::TaskPriority;
pub use range::DueRange;
pub use task::{DueTask, PersistedTaskData};
