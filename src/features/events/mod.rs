//! Events feature: event rows, their derived status, and the queries the
//! event pages and stat cards use.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
