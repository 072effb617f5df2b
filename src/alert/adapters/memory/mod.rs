//! In-memory alert repository adapter.

mod alert;

pub use alert::InMemoryAlertRepository;
