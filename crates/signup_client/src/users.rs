use crate::http::HttpClient;
use signup_core::{ApiError, User, UsersApi};

/// Client for the user listing endpoint; relies on the backend for authorization.
#[derive(Clone)]
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl UsersApi for UserService {
    async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        self.http.get_json("users", &["users"]).await
    }
}
