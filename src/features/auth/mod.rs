//! Auth feature: credentials flow against the backend auth API, session
//! persistence and restoration, the session store, and role-based route
//! guards. Authorization is enforced server-side by row-level security; the
//! guards here are the UX layer that keeps pages from rendering for the
//! wrong principal. Nothing in this module logs token material.
//!
//! Flow overview: login posts the password grant and persists the returned
//! session; the provider resolves the profile and publishes principal and
//! profile together; sign-out revokes server-side and clears locally no
//! matter what the backend answers.

pub(crate) mod changes;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireRole;
