//! `PostgreSQL` adapter for reading tasks.

mod models;
mod schema;
mod source;

pub use source::{PostgresTaskSource, TaskPgPool};
