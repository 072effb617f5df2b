//! StudyMate: due-date alerting for a student academic organizer.
//!
//! This crate raises alerts for tasks approaching their due date. A task
//! due within the next five days receives at most one alert per calendar
//! day, classified as urgent, warning, or reminder depending on how close
//! the due date is and escalated for high-priority tasks.
//!
//! # Architecture
//!
//! StudyMate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`alert`]: Alert policy, idempotent writer, daily sweep and scheduler
//! - [`task`]: Read-only task view consumed by alerting
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Tracing setup

pub mod alert;
pub mod config;
pub mod task;
pub mod telemetry;
