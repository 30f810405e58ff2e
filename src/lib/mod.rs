//! Shared frontend utilities for API access, configuration, errors, build
//! metadata and wall-clock time.
//!
//! The app talks to two collaborators: the session backend (authenticate,
//! renew, logout, session reads) and the data backend (profiles, badges,
//! leaderboard, GitHub OAuth exchange and sync). Both are plain JSON APIs
//! reached through the helpers in [`api`]; which base URL to use is decided
//! by the feature clients. Centralizing these helpers keeps network behavior
//! consistent and avoids duplicated logic in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{get_json, get_optional_json, post_empty, post_empty_no_content, post_json};
pub(crate) use errors::AppError;

/// Current wall-clock time in unix milliseconds.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}
