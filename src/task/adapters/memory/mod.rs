//! In-memory task source adapter.

mod task;

pub use task::InMemoryTaskSource;
