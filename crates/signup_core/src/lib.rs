//! Core of the signup frontend: field validation, the registration form state
//! machine and the contracts of the REST collaborators it talks to.
//!
//! ## Registration Flow
//!
//! 1. **Mount:** A fresh [`RegistrationForm`] validates every field, so an empty
//!    form starts with "required" errors and a disabled submit button.
//! 2. **Edit:** Every change re-validates all fields; blurring a field marks it
//!    touched, which is what makes its error visible.
//! 3. **Submit:** [`RegistrationController::submit`] refuses to send while any
//!    local error is present, otherwise POSTs to `/registration`.
//! 4. **Reconcile:** Failures are routed into the page banner ([`PageError`])
//!    and the per-field errors returned by the server. Success is terminal.
//!
//! Nothing in this crate performs I/O. Transports implement the traits in
//! [`api`] (`signup_client` natively, `gloo-net` in the browser).

pub mod api;
pub mod controller;
pub mod error;
pub mod form;
pub mod page_error;
pub mod types;
pub mod users;
pub mod validation;

pub use api::{AuthApi, RegistrationApi, UsersApi};
pub use controller::RegistrationController;
pub use error::{ApiError, ErrorBody, FieldMessages};
pub use form::{FieldErrors, FormEvent, Help, RegistrationForm, SUBMIT_GATING_FIELDS, SubmissionState};
pub use page_error::PageError;
pub use types::{AuthSession, Field, FormValues, LoginRequest, User};
pub use users::UsersView;
pub use validation::validate_field;
