//! HTTP inbound adapter exposing REST endpoints.

pub mod contacts;
pub mod cors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` scope: contact submission, listing, and health.
///
/// JSON and form extraction failures inside the scope render the standard
/// failure envelope instead of actix's plain-text default.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
            .service(contacts::submit_contact)
            .service(contacts::list_contacts)
            .service(health::health),
    );
}
