//! Read-only view of StudyMate tasks used by due-date alerting.
//!
//! Tasks are owned by the wider StudyMate application; this module only
//! models the fields the alerting policy needs and the lookups it performs.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
