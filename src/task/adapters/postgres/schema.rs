//! Diesel schema for the columns of the `tasks` table read by alerting.
//!
//! The table is owned by the StudyMate application; only the subset of
//! columns needed here is declared.

diesel::table! {
    /// Student tasks.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Due timestamp.
        due_date -> Timestamptz,
        /// Priority (`low`, `medium`, `high`).
        #[max_length = 20]
        priority -> Varchar,
    }
}
