//! Users feature: admin-managed user records, derived affiliation labels,
//! and the table queries behind the admin pages.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
