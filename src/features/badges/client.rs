//! Typed wrappers over the data backend: profile initialization, GitHub OAuth
//! exchange and sync, badge and leaderboard reads. Mutating calls surface
//! backend business failures as `AppError::Business`; reads return empty or
//! absent data instead of erroring when the backend has nothing, so views can
//! render empty states without special-casing.

use crate::{
    app_lib::{AppError, config::AppConfig, get_json, get_optional_json, post_empty, post_json},
    features::badges::types::{Badge, UserProfile},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GitHubOAuthRequest {
    pub code: String,
    pub state: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn base_url() -> String {
    AppConfig::load().data_api_base_url
}

/// Creates the caller's initial profile. The duplicate-profile business error
/// is tagged so callers can treat it as success-equivalent.
pub async fn create_initial_profile() -> Result<UserProfile, AppError> {
    post_empty(&base_url(), "/v1/profiles")
        .await
        .map_err(tag_business)
}

/// Exchanges the OAuth `code`/`state` pair for a connected profile with
/// freshly issued badges. Callers must validate `state` locally first.
pub async fn connect_github_oauth(code: &str, state: &str) -> Result<UserProfile, AppError> {
    let request = GitHubOAuthRequest {
        code: code.to_string(),
        state: state.to_string(),
    };
    post_json(&base_url(), "/v1/github/oauth", &request)
        .await
        .map_err(tag_business)
}

/// Fetches a profile; `None` selects the caller's own. Absent profiles are
/// reported as `Ok(None)`.
pub async fn get_profile(principal: Option<&str>) -> Result<Option<UserProfile>, AppError> {
    let path = match principal {
        Some(principal) => format!("/v1/profiles/{}", principal.trim()),
        None => "/v1/profiles/me".to_string(),
    };
    get_optional_json(&base_url(), &path).await
}

/// Fetches badges for a profile; `None` selects the caller's own. A missing
/// profile yields an empty list.
pub async fn get_badges(principal: Option<&str>) -> Result<Vec<Badge>, AppError> {
    let path = match principal {
        Some(principal) => format!("/v1/profiles/{}/badges", principal.trim()),
        None => "/v1/profiles/me/badges".to_string(),
    };
    let badges: Option<Vec<Badge>> = get_optional_json(&base_url(), &path).await?;
    Ok(badges.unwrap_or_default())
}

/// Fetches the top profiles for the leaderboard. Ranking happens client-side.
pub async fn get_leaderboard(limit: Option<u32>) -> Result<Vec<UserProfile>, AppError> {
    let path = match limit {
        Some(limit) => format!("/v1/leaderboard?limit={limit}"),
        None => "/v1/leaderboard".to_string(),
    };
    let profiles: Option<Vec<UserProfile>> = get_optional_json(&base_url(), &path).await?;
    Ok(profiles.unwrap_or_default())
}

/// Re-syncs the caller's GitHub data and returns the refreshed profile.
pub async fn sync_github_data() -> Result<UserProfile, AppError> {
    post_empty(&base_url(), "/v1/github/sync")
        .await
        .map_err(tag_business)
}

/// Data backend health probe.
pub async fn health_check() -> Result<HealthResponse, AppError> {
    get_json(&base_url(), "/v1/health").await
}

/// Client-error responses from mutating calls carry a business tag in the
/// body; everything else stays a transport error. 401 remains transport so
/// session expiry is not mistaken for a business failure.
fn tag_business(err: AppError) -> AppError {
    match err {
        AppError::Http { status, message } if (400..500).contains(&status) && status != 401 => {
            AppError::Business(message)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::tag_business;
    use crate::app_lib::AppError;

    #[test]
    fn client_errors_become_business_tags() {
        let err = tag_business(AppError::Http {
            status: 409,
            message: "Profile already exists".to_string(),
        });
        assert_eq!(err, AppError::Business("Profile already exists".to_string()));
        assert!(err.is_already_exists());
    }

    #[test]
    fn unauthorized_and_server_errors_stay_transport() {
        let unauthorized = tag_business(AppError::Http {
            status: 401,
            message: "session expired".to_string(),
        });
        assert!(unauthorized.is_transport());

        let server = tag_business(AppError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        });
        assert!(server.is_transport());
    }
}
