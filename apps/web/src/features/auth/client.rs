//! Browser implementation of the auth endpoints. Paths stay centralized here;
//! authorization is enforced by the backend.

use crate::{
    app_lib::{get_json, post_empty, post_json, post_json_response},
    features::auth::token,
};
use signup_core::{
    ApiError, AuthApi, AuthSession, FormValues, LoginRequest, RegistrationApi,
    api::activation_token,
};

/// Stateless handle; the access token is kept in [`token`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAuth;

impl BrowserAuth {
    fn remember(session: AuthSession) -> AuthSession {
        token::set(session.access_token.clone());
        session
    }
}

impl RegistrationApi for BrowserAuth {
    async fn register(&self, values: &FormValues) -> Result<(), ApiError> {
        post_json(&["registration"], values, &token::auth_headers()).await
    }
}

impl AuthApi for BrowserAuth {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        post_json_response(&["login"], request, &token::auth_headers())
            .await
            .map(Self::remember)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = post_empty(&["logout"], &token::auth_headers()).await;
        token::clear();
        result
    }

    async fn activate(&self, token_value: &str) -> Result<AuthSession, ApiError> {
        let token_value = activation_token(token_value)?;
        get_json(&["activation", token_value], &token::auth_headers())
            .await
            .map(Self::remember)
    }

    async fn refresh(&self) -> Result<AuthSession, ApiError> {
        get_json(&["refresh"], &token::auth_headers())
            .await
            .map(Self::remember)
    }
}
