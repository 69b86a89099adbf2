//! Contact submission validation.
//!
//! ## Summary
//! Turns a raw JSON object into a [`ContactSubmission`]. Rules run in a fixed
//! order and the first failing rule is reported; nothing is accumulated.

use serde_json::{Map, Value};
use thiserror::Error;
use validator::{ValidateEmail, ValidateLength};

use super::ContactSubmission;

pub const NAME_MAX_LEN: u64 = 100;
pub const PHONE_MIN_LEN: u64 = 10;
pub const PHONE_MAX_LEN: u64 = 20;
pub const MESSAGE_MAX_LEN: u64 = 2000;

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// ## Summary
/// Validates a raw submission payload.
///
/// `services` defaults to an empty list when absent or `null`. String values
/// are kept exactly as submitted.
///
/// ## Errors
/// Returns the first [`ValidationError`] in rule order: `first_name`,
/// `last_name`, `email`, `phone_number`, `message`, then `services`.
pub fn validate(payload: &Map<String, Value>) -> Result<ContactSubmission, ValidationError> {
    let first_name = required_str(
        payload,
        "first_name",
        "First name is required and must be at least 1 character",
    )?;
    if first_name.trim().is_empty() {
        return Err(ValidationError::new(
            "first_name",
            "First name is required and must be at least 1 character",
        ));
    }
    check_max_len("first_name", "First name", first_name, NAME_MAX_LEN)?;

    let last_name = required_str(payload, "last_name", "Last name is required")?;
    check_max_len("last_name", "Last name", last_name, NAME_MAX_LEN)?;

    let email = required_str(payload, "email", "Email is required")?;
    if !email.validate_email() {
        return Err(ValidationError::new("email", "Invalid email format"));
    }

    let phone_number = required_str(payload, "phone_number", "Phone number is required")?;
    if !phone_number.validate_length(Some(PHONE_MIN_LEN), Some(PHONE_MAX_LEN), None) {
        return Err(ValidationError::new(
            "phone_number",
            format!("Phone number must be between {PHONE_MIN_LEN} and {PHONE_MAX_LEN} characters"),
        ));
    }

    let message = required_str(payload, "message", "Message is required")?;
    check_max_len("message", "Message", message, MESSAGE_MAX_LEN)?;

    let services = services(payload)?;

    Ok(ContactSubmission {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        message: message.to_string(),
        services,
    })
}

/// Missing, `null` and empty values fail with `missing_reason`.
fn required_str<'a>(
    payload: &'a Map<String, Value>,
    field: &'static str,
    missing_reason: &str,
) -> Result<&'a str, ValidationError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, missing_reason)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::new(field, missing_reason)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::new(field, "must be a string")),
    }
}

fn check_max_len(
    field: &'static str,
    label: &str,
    value: &str,
    max: u64,
) -> Result<(), ValidationError> {
    if !value.validate_length(None, Some(max), None) {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn services(payload: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
    match payload.get("services") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ValidationError::new("services", "must be a list of strings"))
            })
            .collect(),
        Some(_) => Err(ValidationError::new("services", "must be a list of strings")),
    }
}
