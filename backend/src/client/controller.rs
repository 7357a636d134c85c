//! Submission flow for the contact form.
//!
//! The controller owns the submit button, the status message, and the
//! in-flight guard. A submission is split into [`FormController::begin_submission`]
//! and [`FormController::finish_submission`] so callers driving their own
//! transport can reuse the UI transitions; [`FormController::submit`] runs
//! both around the injected [`SubmissionTransport`].

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::{info, warn};

use super::endpoint::Endpoint;
use super::form::{ContactForm, SubmissionPayload};
use super::transport::{SubmissionReply, SubmissionTransport, TransportError};

/// Button label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Submitting...";
/// Message shown after an accepted submission.
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your information has been submitted successfully. We will contact you soon.";
/// Message shown when the server gives no reason or the request fails.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, there was an error submitting the form. Please try again.";
/// Seconds a status message stays visible.
pub const MESSAGE_VISIBLE_FOR_SECS: i64 = 5;

/// Styling of the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient status message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Result of one call to [`FormController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    Skipped,
    /// The server stored the submission.
    Accepted,
    /// The server answered with `success: false`.
    Rejected,
    /// The request failed or the reply could not be decoded.
    Failed,
}

/// Drives the form through a submission.
pub struct FormController {
    form: ContactForm,
    endpoint: Endpoint,
    transport: Arc<dyn SubmissionTransport>,
    clock: Arc<dyn Clock>,
    idle_label: String,
    button_label: String,
    in_flight: bool,
    message: Option<StatusMessage>,
    hide_at: Option<DateTime<Utc>>,
}

impl FormController {
    /// Create a controller for a form whose button reads `button_label`.
    pub fn new(
        endpoint: Endpoint,
        transport: Arc<dyn SubmissionTransport>,
        clock: Arc<dyn Clock>,
        button_label: impl Into<String>,
    ) -> Self {
        let idle_label = button_label.into();
        Self {
            form: ContactForm::new(),
            endpoint,
            transport,
            clock,
            button_label: idle_label.clone(),
            idle_label,
            in_flight: false,
            message: None,
            hide_at: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Current submit button text.
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    /// Whether the submit button is disabled.
    pub fn is_button_disabled(&self) -> bool {
        self.in_flight
    }

    /// The visible status message, if any.
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// When the visible message will hide.
    pub fn hide_deadline(&self) -> Option<DateTime<Utc>> {
        self.hide_at
    }

    /// Disable the button and snapshot the payload.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.button_label = SUBMITTING_LABEL.to_owned();
        Some(self.form.payload(self.clock.as_ref()))
    }

    /// Apply the transport outcome, restore the button, and restart the
    /// hide timer.
    pub fn finish_submission(
        &mut self,
        outcome: Result<SubmissionReply, TransportError>,
    ) -> SubmitOutcome {
        let (result, message) = match outcome {
            Ok(reply) if reply.success => {
                self.form.reset();
                (
                    SubmitOutcome::Accepted,
                    StatusMessage {
                        kind: MessageKind::Success,
                        text: SUCCESS_MESSAGE.to_owned(),
                    },
                )
            }
            Ok(reply) => (
                SubmitOutcome::Rejected,
                StatusMessage {
                    kind: MessageKind::Error,
                    text: reply
                        .error
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
                },
            ),
            Err(error) => {
                warn!(%error, endpoint = self.endpoint.as_str(), "contact submission failed");
                (
                    SubmitOutcome::Failed,
                    StatusMessage {
                        kind: MessageKind::Error,
                        text: GENERIC_ERROR_MESSAGE.to_owned(),
                    },
                )
            }
        };

        self.message = Some(message);
        self.hide_at = Some(self.clock.utc() + TimeDelta::seconds(MESSAGE_VISIBLE_FOR_SECS));
        self.button_label = self.idle_label.clone();
        self.in_flight = false;
        result
    }

    /// Post the form through the transport and update the UI state.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(payload) = self.begin_submission() else {
            info!("submission already in flight");
            return SubmitOutcome::Skipped;
        };
        let outcome = self.transport.post(&self.endpoint, &payload).await;
        self.finish_submission(outcome)
    }

    /// Hide the message once `now` reaches the deadline.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        if self.hide_at.is_some_and(|deadline| now >= deadline) {
            self.message = None;
            self.hide_at = None;
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
