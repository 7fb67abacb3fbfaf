use thiserror::Error;

/// Errors raised while building a client, before any request is sent.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API URL cannot be used as a base: {0}")]
    CannotBeBase(String),
    #[error("failed to build HTTP client")]
    Build(#[from] reqwest::Error),
}
