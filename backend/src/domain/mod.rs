//! Domain primitives, services, and ports.
//!
//! Purpose: define the contact submission model and its validation rules,
//! independent of HTTP and SQL. Adapters in `inbound` and `outbound` depend on
//! this module; it depends on neither.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure.
//! - ContactDraft / ContactSubmission: raw and validated submissions.
//! - ContactRecord: a persisted contact row.
//! - ContactService: submission and listing use-cases.

pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;

pub use self::contact::{
    ContactDraft, ContactId, ContactRecord, ContactSubmission, ContactValidationError,
    EmailAddress, INVALID_EMAIL_MESSAGE, NUL_CHARACTER_MESSAGE, NewContact, REQUIRED_FIELDS_MESSAGE,
    normalise_optional,
};
pub use self::contact_service::{ContactService, LIST_FAILED_MESSAGE, SAVE_FAILED_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError};

/// Header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
