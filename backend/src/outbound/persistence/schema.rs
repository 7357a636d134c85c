//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Contact form submissions.
    ///
    /// Rows are append-only. Optional columns hold `NULL` rather than empty
    /// strings.
    contacts (id) {
        /// Primary key: auto-incrementing identifier.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        company -> Nullable<Varchar>,
        message -> Nullable<Text>,
        /// Server clock at acceptance time.
        submitted_at -> Timestamptz,
    }
}
