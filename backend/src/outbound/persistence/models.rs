//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{ContactId, ContactRecord, NewContact};

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactRecord {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            message: row.message,
            submitted_at: row.submitted_at,
        }
    }
}

/// Insertable struct for creating new contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub company: Option<&'a str>,
    pub message: Option<&'a str>,
    pub submitted_at: DateTime<Utc>,
}

impl<'a> From<&'a NewContact> for NewContactRow<'a> {
    fn from(contact: &'a NewContact) -> Self {
        let submission = &contact.submission;
        Self {
            first_name: submission.first_name(),
            last_name: submission.last_name(),
            email: submission.email().as_ref(),
            phone: submission.phone(),
            company: submission.company(),
            message: submission.message(),
            submitted_at: contact.submitted_at,
        }
    }
}
