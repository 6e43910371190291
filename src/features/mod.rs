//! Domain-level frontend features (auth, events, users) and their shared
//! logic. Routes import these modules to keep view code focused while
//! keeping session handling and API access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod events;
pub(crate) mod users;
