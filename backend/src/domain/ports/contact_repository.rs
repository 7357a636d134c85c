//! Port for contact persistence.
//!
//! The [`ContactRepository`] trait is the only way the domain touches the
//! `contacts` table. Rows are append-only: the port exposes an insert and an
//! ordered listing, with no update or delete path.

use async_trait::async_trait;

use crate::domain::{ContactId, ContactRecord, NewContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// A pooled connection could not be obtained.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Port for contact storage and retrieval.
///
/// Each call checks out one connection, runs one statement, and releases the
/// connection before returning, whatever the outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact and return its generated identifier.
    ///
    /// A failed insert must leave no partial row behind.
    async fn insert(&self, contact: &NewContact) -> Result<ContactId, ContactRepositoryError>;

    /// Return every contact, newest `submitted_at` first.
    async fn list_newest_first(&self) -> Result<Vec<ContactRecord>, ContactRepositoryError>;
}
