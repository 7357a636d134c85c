//! Contact submission data model.
//!
//! Inbound adapters build a [`ContactDraft`] from whatever the client sent,
//! then convert it into a validated [`ContactSubmission`]. Only validated
//! submissions reach the repository, stamped with a server-side timestamp as
//! a [`NewContact`]. Persisted rows come back as [`ContactRecord`].

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Client-facing message for a missing first name, last name, or email.
pub const REQUIRED_FIELDS_MESSAGE: &str = "First name, last name, and email are required";
/// Client-facing message for an email that fails the format check.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
/// Client-facing message for a field containing a NUL character.
pub const NUL_CHARACTER_MESSAGE: &str = "Fields must not contain NUL characters";

/// Validation failures for contact submissions.
///
/// The `Display` output is the exact message returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// First name, last name, or email was absent or empty.
    MissingRequiredFields,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// A field contains `\0`, which PostgreSQL text columns cannot store.
    NulCharacter,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredFields => f.write_str(REQUIRED_FIELDS_MESSAGE),
            Self::InvalidEmail => f.write_str(INVALID_EMAIL_MESSAGE),
            Self::NulCharacter => f.write_str(NUL_CHARACTER_MESSAGE),
        }
    }
}

impl std::error::Error for ContactValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately lax: no TLD length or label structure checks.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
///
/// # Examples
/// ```
/// use contact_backend::domain::EmailAddress;
///
/// assert!(EmailAddress::new("jane@doe.com").is_ok());
/// assert!(EmailAddress::new("foo@bar").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ContactValidationError> {
        let value = value.into();
        if email_regex().is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ContactValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map an absent or empty optional field to `None`.
///
/// # Examples
/// ```
/// use contact_backend::domain::normalise_optional;
///
/// assert_eq!(normalise_optional(Some(String::new())), None);
/// assert_eq!(normalise_optional(Some("Acme".into())), Some("Acme".into()));
/// assert_eq!(normalise_optional(None), None);
/// ```
pub fn normalise_optional(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.is_empty())
}

/// Unvalidated contact fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

/// Validated contact submission.
///
/// ## Invariants
/// - `first_name` and `last_name` are non-empty.
/// - `email` matches the lax `local@domain.tld` shape.
/// - Optional fields are `None` rather than empty strings.
/// - No field contains a NUL character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    first_name: String,
    last_name: String,
    email: EmailAddress,
    phone: Option<String>,
    company: Option<String>,
    message: Option<String>,
}

impl ContactSubmission {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn has_nul(&self) -> bool {
        [
            Some(self.first_name()),
            Some(self.last_name()),
            Some(self.email.as_ref()),
            self.phone(),
            self.company(),
            self.message(),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.contains('\0'))
    }
}

impl TryFrom<ContactDraft> for ContactSubmission {
    type Error = ContactValidationError;

    /// Checks run in order: required fields, email format, then NUL
    /// characters in any field. The first failure is reported.
    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let ContactDraft {
            first_name,
            last_name,
            email,
            phone,
            company,
            message,
        } = draft;

        let (Some(first_name), Some(last_name), Some(email)) = (
            normalise_optional(first_name),
            normalise_optional(last_name),
            normalise_optional(email),
        ) else {
            return Err(ContactValidationError::MissingRequiredFields);
        };

        let submission = Self {
            first_name,
            last_name,
            email: EmailAddress::new(email)?,
            phone: normalise_optional(phone),
            company: normalise_optional(company),
            message: normalise_optional(message),
        };
        if submission.has_nul() {
            return Err(ContactValidationError::NulCharacter);
        }
        Ok(submission)
    }
}

/// Server-assigned identifier of a persisted contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(i64);

impl ContactId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated submission stamped with the server clock, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub submission: ContactSubmission,
    pub submitted_at: DateTime<Utc>,
}

/// Persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> ContactDraft {
        ContactDraft {
            first_name: first.map(str::to_owned),
            last_name: last.map(str::to_owned),
            email: email.map(str::to_owned),
            ..ContactDraft::default()
        }
    }

    #[rstest]
    #[case("jane@doe.com")]
    #[case("a@b.c")]
    #[case("a@b..c")]
    #[case("first.last@sub.domain.co.uk")]
    #[case("weird!#$%@x.y")]
    #[case("jane+tag@doe.io")]
    fn accepts_lax_email_shapes(#[case] email: &str) {
        assert!(EmailAddress::new(email).is_ok(), "{email} should be accepted");
    }

    #[rstest]
    #[case("foo@bar")]
    #[case("foo.com")]
    #[case("@bar.com")]
    #[case("foo@.com")]
    #[case("foo@bar.")]
    #[case("a b@c.d")]
    #[case("a@b@c.d")]
    #[case(" jane@doe.com")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert_eq!(
            EmailAddress::new(email),
            Err(ContactValidationError::InvalidEmail)
        );
    }

    #[rstest]
    #[case(draft(None, Some("Doe"), Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), None, Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), Some("Doe"), None))]
    #[case(draft(Some(""), Some("Doe"), Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), Some(""), Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), Some("Doe"), Some("")))]
    fn missing_required_fields_are_rejected(#[case] input: ContactDraft) {
        assert_eq!(
            ContactSubmission::try_from(input),
            Err(ContactValidationError::MissingRequiredFields)
        );
    }

    #[rstest]
    fn required_check_runs_before_email_check() {
        let input = draft(None, Some("Doe"), Some("not-an-email"));
        assert_eq!(
            ContactSubmission::try_from(input),
            Err(ContactValidationError::MissingRequiredFields)
        );
    }

    #[rstest]
    #[case(draft(Some("Ja\0ne"), Some("Doe"), Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), Some("\0"), Some("jane@doe.com")))]
    #[case(draft(Some("Jane"), Some("Doe"), Some("ja\0ne@doe.com")))]
    #[case(ContactDraft {
        message: Some("hello\0".to_owned()),
        ..draft(Some("Jane"), Some("Doe"), Some("jane@doe.com"))
    })]
    fn nul_characters_are_rejected(#[case] input: ContactDraft) {
        assert_eq!(
            ContactSubmission::try_from(input),
            Err(ContactValidationError::NulCharacter)
        );
    }

    #[rstest]
    fn email_format_is_reported_before_nul_characters() {
        let input = draft(Some("Ja\0ne"), Some("Doe"), Some("foo@bar"));
        assert_eq!(
            ContactSubmission::try_from(input),
            Err(ContactValidationError::InvalidEmail)
        );
    }

    #[rstest]
    fn whitespace_names_count_as_present() {
        let input = draft(Some("  "), Some("Doe"), Some("jane@doe.com"));
        let submission = ContactSubmission::try_from(input).expect("whitespace is present");
        assert_eq!(submission.first_name(), "  ");
    }

    #[rstest]
    fn optional_fields_normalise_to_none() {
        let input = ContactDraft {
            phone: Some(String::new()),
            company: None,
            message: Some("Call me".to_owned()),
            ..draft(Some("Jane"), Some("Doe"), Some("jane@doe.com"))
        };

        let submission = ContactSubmission::try_from(input).expect("valid submission");
        assert_eq!(submission.phone(), None);
        assert_eq!(submission.company(), None);
        assert_eq!(submission.message(), Some("Call me"));
        assert_eq!(submission.email().as_ref(), "jane@doe.com");
    }

    #[rstest]
    fn validation_messages_match_client_contract() {
        assert_eq!(
            ContactValidationError::MissingRequiredFields.to_string(),
            "First name, last name, and email are required"
        );
        assert_eq!(
            ContactValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            ContactValidationError::NulCharacter.to_string(),
            "Fields must not contain NUL characters"
        );
    }
}
