//! HTTP helpers for the signup API with consistent timeouts and error handling.
//! Every request carries cookies so the refresh cookie round-trips. The
//! helpers never store tokens; feature clients pass the `Authorization`
//! header in when they hold one.

use super::config::AppConfig;
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use signup_core::ApiError;
use web_sys::{AbortController, AbortSignal, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON from the API.
pub async fn get_json<T: DeserializeOwned>(
    segments: &[&str],
    headers: &[(String, String)],
) -> Result<T, ApiError> {
    let url = AppConfig::load().endpoint(segments)?;
    let response = send_with_timeout(|signal| {
        builder(Method::GET, &url, headers, signal)
            .build()
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and ignores the response body.
pub async fn post_json<B: Serialize>(
    segments: &[&str],
    body: &B,
    headers: &[(String, String)],
) -> Result<(), ApiError> {
    let response = post(segments, Some(encode(body)?), headers).await?;
    handle_empty_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    segments: &[&str],
    body: &B,
    headers: &[(String, String)],
) -> Result<T, ApiError> {
    let response = post(segments, Some(encode(body)?), headers).await?;
    handle_json_response(response).await
}

/// Posts an empty body, used to clear a session.
pub async fn post_empty(segments: &[&str], headers: &[(String, String)]) -> Result<(), ApiError> {
    let response = post(segments, None, headers).await?;
    handle_empty_response(response).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))
}

async fn post(
    segments: &[&str],
    payload: Option<String>,
    headers: &[(String, String)],
) -> Result<Response, ApiError> {
    let url = AppConfig::load().endpoint(segments)?;
    send_with_timeout(move |signal| {
        let builder = builder(Method::POST, &url, headers, signal);
        let request = match payload {
            Some(payload) => builder.header("Content-Type", "application/json").body(payload),
            None => builder.body(""),
        };
        request.map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Common request setup: method, cookies, abort signal and caller headers.
fn builder(
    method: Method,
    url: &str,
    headers: &[(String, String)],
    signal: &AbortSignal,
) -> RequestBuilder {
    let mut builder = RequestBuilder::new(url)
        .method(method)
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(signal));

    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
}

/// Maps network errors into `ApiError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> ApiError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, ApiError>,
) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with their parsed bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::http(status, &body)
}
