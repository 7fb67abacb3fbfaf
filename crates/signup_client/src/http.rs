//! Authenticated HTTP wrapper shared by the service clients. Bodies, passwords
//! and tokens are never logged; only the operation and URL are traced.

use crate::error::ClientError;
use reqwest::{Client, Method, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use signup_core::ApiError;
use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub access_token: Option<SecretString>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            access_token: None,
        }
    }
}

/// Cheap to clone; clones share the cookie jar and the access token.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

struct Inner {
    client: Client,
    base_url: Url,
    access_token: RwLock<Option<SecretString>>,
}

impl HttpClient {
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::CannotBeBase(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .cookie_store(true)
            .build()?;

        debug!("API base URL: {}", base_url);

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                base_url,
                access_token: RwLock::new(config.access_token),
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn set_access_token(&self, token: SecretString) {
        *self
            .inner
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    pub fn clear_access_token(&self) {
        *self
            .inner
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.inner
            .access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Appends percent-encoded path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Config("API URL cannot be used as a base.".to_string()))?
            .pop_if_empty()
            .extend(segments.iter().copied());
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let response = self.send(operation, Method::GET, url, None).await?;
        decode_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let payload = encode(body)?;
        let response = self
            .send(operation, Method::POST, url, Some(payload))
            .await?;
        decode_json(response).await
    }

    /// Posts a JSON body and ignores the response body.
    pub(crate) async fn post_json_empty<B: Serialize>(
        &self,
        operation: &'static str,
        segments: &[&str],
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(segments)?;
        let payload = encode(body)?;
        self.send(operation, Method::POST, url, Some(payload))
            .await
            .map(|_| ())
    }

    pub(crate) async fn post_empty(
        &self,
        operation: &'static str,
        segments: &[&str],
    ) -> Result<(), ApiError> {
        let url = self.endpoint(segments)?;
        self.send(operation, Method::POST, url, None)
            .await
            .map(|_| ())
    }

    /// Sends a request and turns non-2xx responses into `ApiError::Http`.
    async fn send(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        let span = info_span!(
            "auth.request",
            operation,
            http.method = %method,
            url = %url
        );

        let mut builder = self.inner.client.request(method, url);
        if let Some(token) = self
            .inner
            .access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        debug!("{operation} failed with status {status}");
        Err(ApiError::http(status.as_u16(), &text))
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Maps transport errors into user-facing `ApiError` variants.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}
