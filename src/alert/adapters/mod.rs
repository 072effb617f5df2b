//! Adapter implementations of the alert repository port.

pub mod memory;
pub mod postgres;
