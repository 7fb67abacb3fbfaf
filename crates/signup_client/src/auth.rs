//! Client wrappers for the auth endpoints. Session-returning calls store the
//! access token on the shared [`HttpClient`] so later requests are
//! authenticated; logout always forgets it.

use crate::http::HttpClient;
use secrecy::SecretString;
use signup_core::{
    ApiError, AuthApi, AuthSession, FormValues, LoginRequest, RegistrationApi,
    api::activation_token,
};
use tracing::{debug, info};

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn remember(&self, session: AuthSession) -> AuthSession {
        self.http
            .set_access_token(SecretString::from(session.access_token.clone()));
        session
    }
}

impl RegistrationApi for AuthService {
    async fn register(&self, values: &FormValues) -> Result<(), ApiError> {
        debug!(email = %values.email, "registering account");
        self.http
            .post_json_empty("register", &["registration"], values)
            .await?;
        info!("registration request accepted");
        Ok(())
    }
}

impl AuthApi for AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        let session = self.http.post_json("login", &["login"], request).await?;
        Ok(self.remember(session))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = self.http.post_empty("logout", &["logout"]).await;
        self.http.clear_access_token();
        result
    }

    async fn activate(&self, token: &str) -> Result<AuthSession, ApiError> {
        let token = activation_token(token)?;
        let session = self
            .http
            .get_json("activate", &["activation", token])
            .await?;
        Ok(self.remember(session))
    }

    async fn refresh(&self) -> Result<AuthSession, ApiError> {
        let session = self.http.get_json("refresh", &["refresh"]).await?;
        Ok(self.remember(session))
    }
}
