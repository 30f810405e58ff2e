//! Session types exchanged with the session backend. A session is a
//! time-bounded proof of identity; it is held only in memory for the
//! lifetime of the tab and contains no secrets.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Moderator,
    Admin,
}

/// Session summary returned by the session backend. Timestamps are unix
/// milliseconds; `expires_at` is always >= `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_principal: String,
    pub github_username: Option<String>,
    pub created_at: u64,
    pub last_active: u64,
    pub expires_at: u64,
    pub role: UserRole,
    pub is_verified: bool,
}

impl UserSession {
    /// A session is valid only while the clock is strictly before expiry.
    pub fn is_valid(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at
    }

    /// Accepts a renewed session only when it belongs to the same identity,
    /// keeps role and linked account unchanged, and moves expiry strictly
    /// forward. Anything else is a backend anomaly and is discarded.
    pub fn accept_renewal(&self, renewed: UserSession) -> Option<UserSession> {
        let same_identity = renewed.user_principal == self.user_principal
            && renewed.role == self.role
            && renewed.github_username == self.github_username;
        if same_identity && renewed.expires_at > self.expires_at {
            Some(renewed)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    pub principal: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub github_username: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionHealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{UserRole, UserSession};

    fn session(expires_at: u64) -> UserSession {
        UserSession {
            user_principal: "aaaa-bbbb-cccc".to_string(),
            github_username: Some("octocat".to_string()),
            created_at: 1_000,
            last_active: 1_000,
            expires_at,
            role: UserRole::User,
            is_verified: true,
        }
    }

    #[test]
    fn session_is_valid_strictly_before_expiry() {
        let session = session(2_000);
        assert!(session.is_valid(1_999));
        assert!(!session.is_valid(2_000));
        assert!(!session.is_valid(3_000));
        assert!(session.expires_at >= session.created_at);
    }

    #[test]
    fn renewal_extends_expiry_and_keeps_identity() {
        let current = session(2_000);
        let mut renewed = session(5_000);
        renewed.last_active = 1_500;

        let accepted = current
            .accept_renewal(renewed.clone())
            .expect("renewal should be accepted");
        assert_eq!(accepted.user_principal, current.user_principal);
        assert_eq!(accepted.role, current.role);
        assert_eq!(accepted.github_username, current.github_username);
        assert!(accepted.expires_at > current.expires_at);
    }

    #[test]
    fn renewal_that_does_not_move_expiry_forward_is_discarded() {
        let current = session(2_000);
        assert!(current.accept_renewal(session(2_000)).is_none());
        assert!(current.accept_renewal(session(1_500)).is_none());
    }

    #[test]
    fn renewal_for_a_different_identity_is_discarded() {
        let current = session(2_000);
        let mut other = session(5_000);
        other.user_principal = "dddd-eeee-ffff".to_string();
        assert!(current.accept_renewal(other).is_none());

        let mut elevated = session(5_000);
        elevated.role = UserRole::Admin;
        assert!(current.accept_renewal(elevated).is_none());
    }
}
