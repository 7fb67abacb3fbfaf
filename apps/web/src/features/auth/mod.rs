//! Auth feature module: registration, login, activation and session refresh.
//! It keeps transport details out of the UI. The access token lives only in
//! memory and must never be logged.
//!
//! Flow Overview: signup POSTs the form and waits for the user to follow the
//! emailed activation link. Activation and login return a session whose
//! access token is attached to later calls. On load the provider tries a
//! refresh so an existing refresh cookie restores the session.

pub(crate) mod client;
pub(crate) mod state;
pub(crate) mod token;

pub(crate) use client::BrowserAuth;
