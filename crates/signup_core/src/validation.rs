//! Synchronous per-field validators. Each returns the message to display, or
//! `None` when the value is acceptable. Validators are pure and independent of
//! each other so the form can re-run them on every change.

use crate::types::Field;
use regex::Regex;

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Optional leading `+`, then digits only.
const PHONE_PATTERN: &str = r"^\+?[0-9]+$";

/// `local-part@domain(.domain){1,3}.tld` with a TLD of at least two characters.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.+-]+@([A-Za-z0-9_-]+\.){1,3}[A-Za-z0-9_-]{2,}$";

/// Runs the validator that belongs to `field`.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name => validate_name(value),
        Field::Surname => validate_surname(value),
        Field::Phone => validate_phone(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

#[must_use]
pub fn validate_name(value: &str) -> Option<String> {
    value.is_empty().then(|| "Name is required".to_string())
}

#[must_use]
pub fn validate_surname(value: &str) -> Option<String> {
    value.is_empty().then(|| "Surname is required".to_string())
}

#[must_use]
pub fn validate_phone(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Phone is required".to_string());
    }

    if !matches(PHONE_PATTERN, value) {
        return Some("Phone is not valid".to_string());
    }

    None
}

#[must_use]
pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_string());
    }

    if !matches(EMAIL_PATTERN, value) {
        return Some("Email is not valid".to_string());
    }

    None
}

#[must_use]
pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }

    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(format!("At least {MIN_PASSWORD_LENGTH} characters"));
    }

    None
}

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}
