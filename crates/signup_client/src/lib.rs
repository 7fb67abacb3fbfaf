//! Native HTTP transport for the signup API.
//!
//! [`HttpClient`] is the authenticated wrapper every service shares: it keeps
//! the cookie jar for the refresh cookie, attaches the bearer access token once
//! one is known, applies a request timeout and maps failures into
//! [`signup_core::ApiError`]. [`AuthService`] and [`UserService`] are thin
//! per-endpoint wrappers implementing the `signup_core` collaborator traits.

mod auth;
mod error;
mod http;
mod users;

pub use auth::AuthService;
pub use error::ClientError;
pub use http::{ClientConfig, DEFAULT_TIMEOUT, HttpClient};
pub use users::UserService;
