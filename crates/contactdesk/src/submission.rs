//! Inbound contact-form submissions.

use serde_json::Value;
use thiserror::Error;

/// Rejection for a submission with a missing or blank field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Name, email, and message are required.")]
pub struct ValidationError;

/// A validated name/email/message triple, each trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Validate three raw field values.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Validate a raw request body.
    ///
    /// Anything that is not a JSON object is read as `{}`, and fields that
    /// are absent, `null`, or not strings read as empty.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let payload = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        let field = |key: &str| payload.get(key).and_then(Value::as_str).unwrap_or("");
        Self::new(field("name"), field("email"), field("message"))
    }
}
