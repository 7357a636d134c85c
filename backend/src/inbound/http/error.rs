//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the `{success:false, error}`
//! envelope with a matching status code.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::warn;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing message for bodies that are not a JSON object of strings.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Failure envelope shared by every API endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub success: bool,
    pub error: &'a str,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            success: false,
            error: self.message(),
        })
    }
}

/// Turn JSON extractor failures into a 400 failure envelope.
///
/// Registered on [`actix_web::web::JsonConfig`] so malformed bodies, wrong
/// content types, and non-scalar field values share one response shape.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "rejected request body");
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}

/// Turn urlencoded form extractor failures into a 400 failure envelope.
///
/// Silent: the JSON handler logs bodies that neither extractor accepts.
pub fn form_error_handler(_err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}
