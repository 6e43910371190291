//! Shared frontend utilities: HTTP helpers for the backend REST API,
//! configuration, error taxonomy, and build metadata.
//!
//! Every backend call goes through [`api`], which attaches the service
//! headers (`apikey` plus bearer token) and enforces a uniform timeout and
//! error policy. Feature clients wrap these helpers per endpoint so route
//! code never builds requests or handles tokens directly.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{delete_empty, get_json, post_empty, post_json, post_json_empty};
pub(crate) use errors::AppError;
