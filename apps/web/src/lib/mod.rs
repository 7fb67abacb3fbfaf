//! Shared frontend utilities for API access, configuration, and build metadata.
//!
//! ## Registration flow
//!
//! 1. **Sign up:** the form POSTs all five fields to `/registration`. A 2xx
//!    response switches the page to the "Check your email" confirmation.
//! 2. **Activate:** the emailed link opens `/activate/:token`, which calls
//!    `GET /activation/{token}` and keeps the returned access token in memory.
//! 3. **Session:** `/login` and `/refresh` return the same session shape; the
//!    access token is attached as `Authorization: Bearer` on later calls.
//!
//! Every request includes cookies so the refresh cookie set by the API is
//! sent back. Callers must avoid logging token material.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, post_empty, post_json, post_json_response};
