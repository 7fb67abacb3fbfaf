//! Feature modules that talk to the API and hold cross-route state.

pub(crate) mod auth;
pub(crate) mod page_error;
pub(crate) mod users;
