//! Auth feature: identity-provider popup flow, backend session lifecycle, and
//! the reactive context routes read authentication state from. It keeps the
//! sign-in machinery out of the UI; view code only sees the context and the
//! guard. Principals are opaque identifiers, never secrets, so they may be
//! displayed but nothing here should ever log or store credential material.

pub(crate) mod client;
mod guards;
pub(crate) mod provider;
pub(crate) mod session;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::RequireAuth;
