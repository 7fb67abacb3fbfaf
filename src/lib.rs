//! # Signup
//!
//! Command line front end for the signup API. It drives the same registration
//! form used by the web app (`signup_core`) through the native HTTP client
//! (`signup_client`), so field validation, server error reconciliation and the
//! page banner behave identically in the terminal.

pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
