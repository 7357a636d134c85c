//! Headless model of the browser contact form.
//!
//! The browser page is reduced to plain state: field values with advisory
//! marks, a submit button, and a transient status message. The controller
//! posts the form through an injected [`SubmissionTransport`], so the whole
//! flow runs in tests without a browser or network.

pub mod controller;
pub mod endpoint;
pub mod form;
pub mod navigation;
pub mod transport;

pub use controller::{
    FormController, GENERIC_ERROR_MESSAGE, MESSAGE_VISIBLE_FOR_SECS, MessageKind, StatusMessage,
    SUBMITTING_LABEL, SUCCESS_MESSAGE, SubmitOutcome,
};
pub use endpoint::Endpoint;
pub use form::{ContactForm, FieldMark, FormField, SubmissionPayload};
pub use navigation::{ScrollBlock, ScrollCommand, resolve_anchor};
pub use transport::{ReqwestTransport, SubmissionReply, SubmissionTransport, TransportError};
