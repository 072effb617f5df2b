//! Diesel schema for alert persistence.

diesel::table! {
    /// Due-date alerts, unique per task and calendar day.
    alerts (id) {
        /// Alert identifier.
        id -> Uuid,
        /// Originating task.
        task_id -> Uuid,
        /// Owner of the originating task.
        owner_id -> Uuid,
        /// Calendar day the alert is for.
        alert_date -> Date,
        /// Alert text.
        message -> Text,
        /// Alert tier.
        #[max_length = 20]
        category -> Varchar,
        /// Alert severity.
        #[max_length = 20]
        severity -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
