//! Cross-origin policy for the public form origins.

use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://autoreportform.click",
    "https://www.autoreportform.click",
    "http://localhost:3000",
];

/// Build the CORS middleware: listed origins only, credentials allowed,
/// `GET`/`POST` with a `Content-Type` header.
pub fn cors_policy() -> Cors {
    ALLOWED_ORIGINS
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST])
        .allowed_header(header::CONTENT_TYPE)
        .supports_credentials()
        .max_age(3600)
}
