//! Driving port for reading stored contacts.

use async_trait::async_trait;

use crate::domain::{ContactRecord, Error};

/// Domain use-case port for listing contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Return all contacts ordered by submission time, newest first.
    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, Error>;
}
