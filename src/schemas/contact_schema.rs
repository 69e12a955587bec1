use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::utils::validation::{FieldErrors, validate_payload};

/// Contact form payload as sent by the website (or any other caller).
///
/// The same rules guard both sides of the wire: [`crate::client::ContactClient`]
/// checks them before sending and the contact service checks them again before
/// writing. Required fields tolerate absence and `null` so that missing input
/// is reported by the rules below, field by field, instead of by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "website_email", message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC-style syntax check plus the stricter shape the website form accepts:
/// a dotted domain ending in an alphabetic label of two or more letters, and
/// no leading, trailing or doubled dots in the local part.
fn website_email(email: &str) -> Result<(), ValidationError> {
    let shaped = email.rsplit_once('@').is_some_and(|(local, domain)| {
        let labels: Vec<&str> = domain.split('.').collect();
        let tld = labels.last().copied().unwrap_or_default();
        !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
            && labels.len() >= 2
            && labels.iter().all(|label| !label.is_empty())
            && tld.len() >= 2
            && tld.chars().all(|c| c.is_ascii_alphabetic())
    });

    if shaped && email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactSubmission {
    /// Trim surrounding whitespace; optional fields left empty become `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: trim_optional(self.phone),
            company: trim_optional(self.company),
            message: self.message.trim().to_string(),
        }
    }

    /// Normalize, then check every contact rule.
    pub fn validated(self) -> Result<ValidatedSubmission, FieldErrors> {
        let submission = self.normalized();
        validate_payload(&submission)?;
        Ok(ValidatedSubmission(submission))
    }
}

/// A normalized submission that passed [`ContactSubmission::validated`].
///
/// There is no other way to build one, so holding a `ValidatedSubmission`
/// means the rules held at the time it was created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedSubmission(ContactSubmission);

impl ValidatedSubmission {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.0.company.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }

    pub fn into_inner(self) -> ContactSubmission {
        self.0
    }
}

impl From<ValidatedSubmission> for ContactSubmission {
    fn from(validated: ValidatedSubmission) -> Self {
        validated.into_inner()
    }
}
