//! HTTP bindings for the session backend. These helpers centralize endpoint
//! paths; the soft-failure policy around them lives in the session client.

use crate::{
    app_lib::{
        AppError, config::AppConfig, get_json, get_optional_json, post_empty,
        post_empty_no_content, post_json,
    },
    features::auth::types::{
        AuthenticateRequest, SessionHealthResponse, UpdateSessionRequest, UserSession,
    },
};
pub(crate) use crate::features::auth::provider::LocalBoxFuture;

fn base_url() -> String {
    AppConfig::load().session_api_base_url
}

/// Materializes a backend session for the freshly established identity.
pub async fn authenticate(principal: &str) -> Result<UserSession, AppError> {
    let request = AuthenticateRequest {
        principal: principal.to_string(),
    };
    post_json(&base_url(), "/v1/session/authenticate", &request).await
}

/// Fetches the current session. Returns `None` when it is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json(&base_url(), "/v1/session").await
}

/// Extends the current session's expiry.
pub async fn renew() -> Result<UserSession, AppError> {
    post_empty(&base_url(), "/v1/session/renew").await
}

/// Creates or updates the session's linked GitHub username.
pub async fn update_session(github_username: Option<&str>) -> Result<UserSession, AppError> {
    let request = UpdateSessionRequest {
        github_username: github_username.map(str::to_string),
    };
    post_json(&base_url(), "/v1/session", &request).await
}

/// Tears down the backend session.
pub async fn logout() -> Result<(), AppError> {
    post_empty_no_content(&base_url(), "/v1/session/logout").await
}

/// Session backend health probe.
pub async fn health_check() -> Result<SessionHealthResponse, AppError> {
    get_json(&base_url(), "/v1/health").await
}

/// Seam over the endpoints above so the session client can be exercised with
/// fakes.
pub trait SessionApi {
    fn authenticate<'a>(
        &'a self,
        principal: &'a str,
    ) -> LocalBoxFuture<'a, Result<UserSession, AppError>>;
    fn fetch_session<'a>(&'a self) -> LocalBoxFuture<'a, Result<Option<UserSession>, AppError>>;
    fn renew<'a>(&'a self) -> LocalBoxFuture<'a, Result<UserSession, AppError>>;
    fn update_session<'a>(
        &'a self,
        github_username: Option<&'a str>,
    ) -> LocalBoxFuture<'a, Result<UserSession, AppError>>;
    fn logout<'a>(&'a self) -> LocalBoxFuture<'a, Result<(), AppError>>;
}

/// Production [`SessionApi`] backed by the HTTP endpoints.
pub struct HttpSessionApi;

impl SessionApi for HttpSessionApi {
    fn authenticate<'a>(
        &'a self,
        principal: &'a str,
    ) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
        Box::pin(authenticate(principal))
    }

    fn fetch_session<'a>(&'a self) -> LocalBoxFuture<'a, Result<Option<UserSession>, AppError>> {
        Box::pin(fetch_session())
    }

    fn renew<'a>(&'a self) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
        Box::pin(renew())
    }

    fn update_session<'a>(
        &'a self,
        github_username: Option<&'a str>,
    ) -> LocalBoxFuture<'a, Result<UserSession, AppError>> {
        Box::pin(update_session(github_username))
    }

    fn logout<'a>(&'a self) -> LocalBoxFuture<'a, Result<(), AppError>> {
        Box::pin(logout())
    }
}
