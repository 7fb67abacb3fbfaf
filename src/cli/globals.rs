use anyhow::{Context, Result};
use secrecy::SecretString;
use signup_client::{ClientConfig, DEFAULT_TIMEOUT, HttpClient};
use std::time::Duration;

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub access_token: Option<SecretString>,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.access_token = Some(token);
    }

    /// Builds the authenticated HTTP client for these settings.
    /// # Errors
    /// Returns an error if the API URL is invalid or the client cannot be built.
    pub fn http_client(&self) -> Result<HttpClient> {
        let mut config = ClientConfig::new(self.api_url.clone());
        config.timeout = self.timeout;
        config.access_token = self.access_token.clone();

        HttpClient::new(config).with_context(|| format!("invalid API URL: {}", self.api_url))
    }
}
