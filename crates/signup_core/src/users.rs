//! Listing of registered users: fetch once, render, report failures to the
//! page banner.

use crate::{api::UsersApi, page_error::PageError, types::User};
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersView {
    users: Vec<User>,
}

impl UsersView {
    /// Fetches all users. On failure the view stays empty and the error
    /// message goes to `banner`.
    pub async fn load<A: UsersApi>(api: &A, banner: &mut PageError) -> Self {
        match api.get_all().await {
            Ok(users) => {
                debug!(count = users.len(), "users loaded");
                Self { users }
            }
            Err(err) => {
                warn!("failed to load users: {err}");
                if let Some(message) = err.message() {
                    banner.set(message);
                }
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
