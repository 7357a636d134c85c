//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use contact_backend::domain::ContactService;
use contact_backend::inbound::http::state::HttpState;
use contact_backend::outbound::persistence::{DieselContactRepository, DieselStorageProbe};

use super::ServerConfig;

/// Build handler state from the configured pool.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(ContactService::new(
        Arc::new(DieselContactRepository::new(config.db_pool.clone())),
        Arc::new(DefaultClock),
    ));
    web::Data::new(HttpState::new(
        service.clone(),
        service,
        Arc::new(DieselStorageProbe::new(config.db_pool.clone())),
    ))
}
