//! Contracts of the REST collaborators. Transports implement these traits; the
//! form and views only depend on the request/response shapes.
//!
//! The futures are not required to be `Send` so that browser transports built
//! on `JsFuture` can implement them.
#![allow(async_fn_in_trait)]

use crate::{
    error::ApiError,
    types::{AuthSession, FormValues, LoginRequest, User},
};

/// `POST /registration`.
pub trait RegistrationApi {
    async fn register(&self, values: &FormValues) -> Result<(), ApiError>;
}

/// The remaining auth endpoints, kept next to registration for completeness.
pub trait AuthApi: RegistrationApi {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError>;

    /// `POST /logout`.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /activation/{token}`.
    async fn activate(&self, token: &str) -> Result<AuthSession, ApiError>;

    /// `GET /refresh`.
    async fn refresh(&self) -> Result<AuthSession, ApiError>;
}

/// `GET /users`.
pub trait UsersApi {
    async fn get_all(&self) -> Result<Vec<User>, ApiError>;
}

impl<T: RegistrationApi + ?Sized> RegistrationApi for &T {
    async fn register(&self, values: &FormValues) -> Result<(), ApiError> {
        (**self).register(values).await
    }
}

impl<T: UsersApi + ?Sized> UsersApi for &T {
    async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        (**self).get_all().await
    }
}

/// Rejects blank activation tokens before any request is made.
///
/// # Errors
/// Returns `ApiError::Config` when the token is empty after trimming.
pub fn activation_token(token: &str) -> Result<&str, ApiError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("Activation token is required.".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::activation_token;
    use crate::error::ApiError;

    #[test]
    fn activation_token_is_trimmed_and_required() {
        assert_eq!(activation_token("  abc "), Ok("abc"));
        assert!(matches!(activation_token("   "), Err(ApiError::Config(_))));
    }
}
