//! Error taxonomy shared by the identity and data clients. Boundary clients
//! convert every transport failure into one of these variants before it can
//! reach view code; views only ever format them for display.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    /// Identity-provider flow failure: cancelled, blocked popup, unreachable.
    Provider(String),
    /// Tagged business error reported by a backend operation.
    Business(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True for the duplicate-profile business tag, which callers treat as
    /// success-equivalent when initializing a profile.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AppError::Business(message)
            if message.to_lowercase().contains("already exists"))
    }

    /// True for transport-level failures where reads fall back to the
    /// last-known-good data instead of blocking the view.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Timeout(_) | AppError::Http { .. }
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Provider(message) => write!(formatter, "Sign-in failed: {message}"),
            AppError::Business(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn already_exists_matches_business_tag_only() {
        assert!(AppError::Business("Profile already exists".to_string()).is_already_exists());
        assert!(!AppError::Business("Invalid OAuth state".to_string()).is_already_exists());
        assert!(!AppError::Network("profile already exists".to_string()).is_already_exists());
    }

    #[test]
    fn transport_errors_are_distinguished_from_business_errors() {
        assert!(AppError::Timeout("t".to_string()).is_transport());
        assert!(AppError::Http {
            status: 502,
            message: "bad gateway".to_string()
        }
        .is_transport());
        assert!(!AppError::Business("Profile already exists".to_string()).is_transport());
        assert!(!AppError::Provider("cancelled".to_string()).is_transport());
    }
}
