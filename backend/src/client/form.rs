//! Form field state and advisory validation marks.

use std::collections::HashMap;

use chrono::SecondsFormat;
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

/// The six inputs on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Message,
}

impl FormField {
    /// Every field in page order.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::Message,
    ];

    /// Element id and JSON key of the field.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    /// Whether the field receives a mark when focus leaves it.
    pub fn is_required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }
}

/// Visual state of a required field after blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    Valid,
    Invalid,
}

/// JSON body posted to the contact endpoint.
///
/// Blank fields are sent as empty strings; the server normalises them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    /// Client clock at submission; informational only.
    pub timestamp: String,
}

/// Current values and marks of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: HashMap<FormField, String>,
    marks: HashMap<FormField, FieldMark>,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`; empty when never set.
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Current mark of `field`, if any.
    pub fn mark(&self, field: FormField) -> Option<FieldMark> {
        self.marks.get(&field).copied()
    }

    /// Record typed input. A mark clears once the content is non-empty.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.marks.remove(&field);
        }
        self.values.insert(field, value);
    }

    /// Mark a required field as focus leaves it and return the new mark.
    ///
    /// Optional fields are never marked.
    pub fn blur(&mut self, field: FormField) -> Option<FieldMark> {
        if !field.is_required() {
            return None;
        }
        let value = self.value(field).trim();
        let valid = match field {
            FormField::Email => !value.is_empty() && EmailAddress::new(value).is_ok(),
            _ => !value.is_empty(),
        };
        let mark = if valid {
            FieldMark::Valid
        } else {
            FieldMark::Invalid
        };
        self.marks.insert(field, mark);
        Some(mark)
    }

    /// Clear every value and mark.
    pub fn reset(&mut self) {
        self.values.clear();
        self.marks.clear();
    }

    /// Snapshot the form as a request body stamped with `clock`.
    pub fn payload(&self, clock: &dyn Clock) -> SubmissionPayload {
        SubmissionPayload {
            first_name: self.value(FormField::FirstName).to_owned(),
            last_name: self.value(FormField::LastName).to_owned(),
            email: self.value(FormField::Email).to_owned(),
            phone: self.value(FormField::Phone).to_owned(),
            company: self.value(FormField::Company).to_owned(),
            message: self.value(FormField::Message).to_owned(),
            timestamp: clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
