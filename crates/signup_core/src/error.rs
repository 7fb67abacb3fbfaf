use crate::types::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters of server-provided text surfaced to the UI.
pub const MAX_ERROR_CHARS: usize = 200;

/// Failure of a call to the REST API, shared by every transport.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Option<ErrorBody>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Builds an HTTP error from a non-2xx status and its raw body text.
    #[must_use]
    pub fn http(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: format!("Request failed with status code {status}"),
            body: ErrorBody::parse(body),
        }
    }

    /// Top-level message meant for the page banner.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        (!message.trim().is_empty()).then_some(message)
    }

    /// Structured payload returned by the server, if any.
    #[must_use]
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error payload of the API: `{ errors: {email?, ...}, message? }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<FieldMessages>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parses a response body, returning `None` unless it is a JSON object.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut body: ErrorBody = serde_json::from_str(text.trim()).ok()?;
        body.message = body.message.as_deref().map(sanitize_message);
        if let Some(errors) = body.errors.as_mut() {
            errors.sanitize();
        }
        Some(body)
    }
}

/// Per-field messages reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessages {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl FieldMessages {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::Name => self.name.as_deref(),
            Field::Surname => self.surname.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }

    fn sanitize(&mut self) {
        for slot in [
            &mut self.email,
            &mut self.password,
            &mut self.name,
            &mut self.surname,
            &mut self.phone,
        ] {
            *slot = slot.as_deref().map(sanitize_message).filter(|m| !m.is_empty());
        }
    }
}

/// Trims and truncates server text before it reaches the UI.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message.trim().chars().take(MAX_ERROR_CHARS).collect()
}
