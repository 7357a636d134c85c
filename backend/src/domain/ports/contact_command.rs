//! Driving port for accepting contact submissions.
//!
//! Inbound adapters hand over the raw [`ContactDraft`]; validation,
//! timestamping, and persistence all happen behind this port.

use async_trait::async_trait;

use crate::domain::{ContactDraft, ContactId, Error};

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitContactResponse {
    pub contact_id: ContactId,
}

/// Domain use-case port for submitting contact details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Validate and persist one submission.
    ///
    /// Validation failures return [`crate::domain::ErrorCode::InvalidRequest`]
    /// with the client-facing message; storage failures return
    /// [`crate::domain::ErrorCode::InternalError`].
    async fn submit(&self, draft: ContactDraft) -> Result<SubmitContactResponse, Error>;
}
