//! Adapter implementations of the task source port.

pub mod memory;
pub mod postgres;
