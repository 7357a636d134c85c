//! Contact submission and listing HTTP handlers.
//!
//! ```text
//! POST /api/contact   (JSON or urlencoded form body)
//! GET  /api/contacts
//! ```

use actix_web::{get, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactDraft, ContactRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Acknowledgement text returned for an accepted submission.
pub const CONTACT_SAVED_MESSAGE: &str = "Contact information saved successfully";

/// One scalar field value as sent by a browser form or script.
///
/// Arrays and objects are not accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
}

impl FieldValue {
    /// Text form of the value. `false` and zero are treated as absent.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::inbound::http::contacts::FieldValue;
    ///
    /// assert_eq!(FieldValue::Flag(false).into_text(), None);
    /// assert_eq!(FieldValue::Number(7.into()).into_text(), Some("7".to_owned()));
    /// ```
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(flag) => flag.then(|| "true".to_owned()),
            Self::Number(number) => {
                (number.as_f64() != Some(0.0)).then(|| number.to_string())
            }
        }
    }
}

/// Request payload for a contact submission.
///
/// Every field is optional at the wire level so missing values reach domain
/// validation. Unknown keys, including the client `timestamp`, are ignored.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[schema(value_type = Option<String>, example = "Jane")]
    pub first_name: Option<FieldValue>,
    #[schema(value_type = Option<String>, example = "Doe")]
    pub last_name: Option<FieldValue>,
    #[schema(value_type = Option<String>, example = "jane@doe.com")]
    pub email: Option<FieldValue>,
    #[schema(value_type = Option<String>)]
    pub phone: Option<FieldValue>,
    #[schema(value_type = Option<String>)]
    pub company: Option<FieldValue>,
    #[schema(value_type = Option<String>)]
    pub message: Option<FieldValue>,
}

impl From<ContactRequest> for ContactDraft {
    fn from(value: ContactRequest) -> Self {
        Self {
            first_name: value.first_name.and_then(FieldValue::into_text),
            last_name: value.last_name.and_then(FieldValue::into_text),
            email: value.email.and_then(FieldValue::into_text),
            phone: value.phone.and_then(FieldValue::into_text),
            company: value.company.and_then(FieldValue::into_text),
            message: value.message.and_then(FieldValue::into_text),
        }
    }
}

/// Response payload for an accepted submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSavedResponse {
    pub success: bool,
    #[schema(example = "Contact information saved successfully")]
    pub message: String,
    pub contact_id: i64,
}

/// One stored contact, keyed by its column names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactRowResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    #[schema(example = "2025-03-14T09:26:53.000Z")]
    pub submitted_at: String,
}

impl From<ContactRecord> for ContactRowResponse {
    fn from(value: ContactRecord) -> Self {
        Self {
            id: value.id.get(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            message: value.message,
            submitted_at: value
                .submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Response payload listing stored contacts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactListResponse {
    pub success: bool,
    pub contacts: Vec<ContactRowResponse>,
}

/// Validate and store one contact submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body(content(
        (ContactRequest = "application/json"),
        (ContactRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Submission stored", body = ContactSavedResponse),
        (status = 400, description = "Missing fields, invalid email, or unreadable body", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Either<web::Form<ContactRequest>, web::Json<ContactRequest>>,
) -> ApiResult<web::Json<ContactSavedResponse>> {
    let (web::Either::Left(web::Form(request)) | web::Either::Right(web::Json(request))) = payload;
    let response = state.contacts.submit(ContactDraft::from(request)).await?;

    Ok(web::Json(ContactSavedResponse {
        success: true,
        message: CONTACT_SAVED_MESSAGE.to_owned(),
        contact_id: response.contact_id.get(),
    }))
}

/// List every stored contact, newest first.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "Stored contacts", body = ContactListResponse),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ContactListResponse>> {
    let contacts = state.contacts_query.list_contacts().await?;

    Ok(web::Json(ContactListResponse {
        success: true,
        contacts: contacts.into_iter().map(ContactRowResponse::from).collect(),
    }))
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
