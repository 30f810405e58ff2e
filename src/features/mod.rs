//! Domain-level frontend features (auth, badges) and their shared logic.
//! Routes import these modules to keep view code focused while keeping
//! session handling and API plumbing in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod badges;
