//! Browser implementation of the users endpoint.

use crate::{app_lib::get_json, features::auth::token};
use signup_core::{ApiError, User, UsersApi};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUsers;

impl UsersApi for BrowserUsers {
    async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        get_json(&["users"], &token::auth_headers()).await
    }
}
