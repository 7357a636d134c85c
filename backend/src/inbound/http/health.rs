//! Storage connectivity probe.
//!
//! ```text
//! GET /api/health
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Health payload reporting whether a storage connection could be acquired.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "connected")]
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn connected() -> Self {
        Self {
            status: "ok".to_owned(),
            database: "connected".to_owned(),
            error: None,
        }
    }

    fn disconnected(error: String) -> Self {
        Self {
            status: "error".to_owned(),
            database: "disconnected".to_owned(),
            error: Some(error),
        }
    }
}

/// Acquire and release one storage connection.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Storage reachable", body = HealthResponse),
        (status = 500, description = "Storage unreachable", body = HealthResponse)
    ),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    match state.storage.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::connected()),
        Err(err) => {
            warn!(error = %err, "health check could not reach storage");
            HttpResponse::InternalServerError().json(HealthResponse::disconnected(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        MockContactCommand, MockContactQuery, MockStorageProbe, StorageProbeError,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn health_of(storage: MockStorageProbe) -> (StatusCode, Value) {
        let state = HttpState::new(
            Arc::new(MockContactCommand::new()),
            Arc::new(MockContactQuery::new()),
            Arc::new(storage),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(health)),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/api/health").to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("health JSON"))
    }

    #[rstest]
    #[actix_web::test]
    async fn reachable_storage_reports_connected() {
        let mut storage = MockStorageProbe::new();
        storage.expect_ping().times(1).return_once(|| Ok(()));

        let (status, body) = health_of(storage).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "database": "connected"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn unreachable_storage_reports_driver_message() {
        let mut storage = MockStorageProbe::new();
        storage
            .expect_ping()
            .times(1)
            .return_once(|| Err(StorageProbeError::unreachable("connection refused")));

        let (status, body) = health_of(storage).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "status": "error",
                "database": "disconnected",
                "error": "connection refused"
            })
        );
    }
}
