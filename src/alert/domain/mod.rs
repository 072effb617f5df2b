//! Domain model for due-date alerts.
//!
//! Contains the alert aggregate, its category and severity vocabulary, the
//! alert window, and the pure classification policy. Nothing here performs
//! I/O.

mod alert;
mod category;
mod error;
mod ids;
mod policy;
mod window;

pub use alert::{Alert, PersistedAlertData};
pub use category::{AlertCategory, Severity};
pub use error::{ParseAlertCategoryError, ParseSeverityError};
pub use ids::AlertId;
pub use policy::{ALERT_LOOKAHEAD_DAYS, AlertClassification, classify, days_until_due};
pub use window::AlertWindow;
