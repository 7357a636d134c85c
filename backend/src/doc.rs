//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact and health endpoints together with the
//! schema wrappers for the response envelopes. The generated document is
//! served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::contacts::{
    ContactListResponse, ContactRequest, ContactRowResponse, ContactSavedResponse,
};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::ErrorSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact submission API",
        description = "Accepts contact form submissions and reports storage health."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::submit_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        ContactRequest,
        ContactSavedResponse,
        ContactRowResponse,
        ContactListResponse,
        HealthResponse,
        ErrorSchema
    )),
    tags(
        (name = "contacts", description = "Contact form submissions"),
        (name = "health", description = "Storage connectivity probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_describes_failure_envelope() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "success");
        assert_object_schema_has_field(error_schema, "error");
    }

    #[rstest]
    #[case("/api/contact")]
    #[case("/api/contacts")]
    #[case("/api/health")]
    fn document_lists_every_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn contact_request_uses_camel_case_keys() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let request = schemas.get("ContactRequest").expect("ContactRequest schema");

        assert_object_schema_has_field(request, "firstName");
        assert_object_schema_has_field(request, "lastName");
    }
}
