//! Contact domain service.
//!
//! Implements the submission and listing driving ports on top of a
//! [`ContactRepository`]. Storage failures are logged with their detail and
//! surfaced to callers as fixed, client-safe messages.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    ContactCommand, ContactQuery, ContactRepository, ContactRepositoryError,
    SubmitContactResponse,
};
use crate::domain::{ContactDraft, ContactRecord, ContactSubmission, Error, NewContact};

/// Client-facing message when an insert fails.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save contact information";
/// Client-facing message when the listing query fails.
pub const LIST_FAILED_MESSAGE: &str = "Failed to retrieve contacts";

fn storage_error(
    operation: &'static str,
    public: &'static str,
) -> impl Fn(ContactRepositoryError) -> Error {
    move |err| {
        error!(error = %err, operation, "contact storage operation failed");
        Error::internal(public)
    }
}

/// Contact service implementing [`ContactCommand`] and [`ContactQuery`].
#[derive(Clone)]
pub struct ContactService<R> {
    contacts: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ContactService<R> {
    /// Create a service over `contacts`, stamping submissions with `clock`.
    pub fn new(contacts: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { contacts, clock }
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn submit(&self, draft: ContactDraft) -> Result<SubmitContactResponse, Error> {
        let submission = ContactSubmission::try_from(draft)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let contact = NewContact {
            submission,
            submitted_at: self.clock.utc(),
        };

        let contact_id = self
            .contacts
            .insert(&contact)
            .await
            .map_err(storage_error("insert", SAVE_FAILED_MESSAGE))?;

        info!(%contact_id, "contact submission stored");
        Ok(SubmitContactResponse { contact_id })
    }
}

#[async_trait]
impl<R> ContactQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, Error> {
        self.contacts
            .list_newest_first()
            .await
            .map_err(storage_error("list", LIST_FAILED_MESSAGE))
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
