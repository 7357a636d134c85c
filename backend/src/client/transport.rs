//! Transport seam for posting the contact payload.
//!
//! The reqwest adapter owns HTTP details only: JSON encoding, the request
//! timeout, and decoding the acknowledgement. Non-2xx statuses still carry a
//! JSON envelope, so the body is decoded whatever the status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::endpoint::Endpoint;
use super::form::SubmissionPayload;

/// Acknowledgement envelope returned by the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmissionReply {
    /// Reply reporting an accepted submission.
    pub fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Reply reporting a rejection with the server's message.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Failures reaching the endpoint or reading its reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("contact request failed: {message}")]
    Request { message: String },
    /// The reply was not a JSON acknowledgement.
    #[error("contact reply could not be decoded: {message}")]
    Decode { message: String },
}

/// Port for delivering a submission payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// POST `payload` as JSON to `endpoint` and decode the reply.
    async fn post(
        &self,
        endpoint: &Endpoint,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReply, TransportError>;
}

/// Transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn map_request_error(error: reqwest::Error) -> TransportError {
    TransportError::Request {
        message: error.to_string(),
    }
}

#[async_trait]
impl SubmissionTransport for ReqwestTransport {
    async fn post(
        &self,
        endpoint: &Endpoint,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReply, TransportError> {
        let response = self
            .client
            .post(endpoint.as_str())
            .json(payload)
            .send()
            .await
            .map_err(map_request_error)?;
        let body = response.bytes().await.map_err(map_request_error)?;

        serde_json::from_slice(body.as_ref()).map_err(|error| TransportError::Decode {
            message: error.to_string(),
        })
    }
}
