//! `PostgreSQL` adapters for alert persistence.

mod models;
mod repository;
mod schema;

pub use repository::{AlertPgPool, PostgresAlertRepository};
