//! GitHub OAuth client-side plumbing: the outgoing authorization redirect and
//! the returning callback contract. The `state` nonce binds an outgoing
//! authorization request to its callback; a mismatch is rejected here, before
//! any backend call is made.

/// LocalStorage key holding the most recently generated `state` nonce.
const STATE_STORAGE_KEY: &str = "veriflair.github_oauth_state";

/// Fixed callback path registered with the OAuth application.
pub const CALLBACK_PATH: &str = "/auth/github/callback";

/// Scopes requested from GitHub.
const OAUTH_SCOPE: &str = "user:email,public_repo";

/// Outcome of parsing the provider's callback query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The provider reported an error; surfaced verbatim, no backend call.
    ProviderError(String),
    /// `code` or `state` was absent from the callback.
    MissingParams,
    /// Both parameters present; exchange them after validating `state`.
    Exchange { code: String, state: String },
}

/// Starts the authorization flow: generates and stores a fresh `state` nonce
/// and navigates the tab to the GitHub authorize URL.
pub fn begin_authorization() -> Result<(), crate::app_lib::AppError> {
    use crate::app_lib::AppError;
    use crate::app_lib::config::AppConfig;
    use gloo_storage::{LocalStorage, Storage};

    let config = AppConfig::load();
    if config.github_client_id.is_empty() {
        return Err(AppError::Config(
            "GitHub client id is not configured.".to_string(),
        ));
    }

    let state = generate_state();
    LocalStorage::set(STATE_STORAGE_KEY, &state)
        .map_err(|err| AppError::Config(format!("Failed to store OAuth state: {err}")))?;

    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("No window available.".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| AppError::Config("Failed to read window origin.".to_string()))?;
    let url = authorize_url(
        &config.github_client_id,
        &state,
        &format!("{origin}{CALLBACK_PATH}"),
    );

    window
        .location()
        .set_href(&url)
        .map_err(|_| AppError::Config("Failed to navigate to GitHub.".to_string()))?;
    Ok(())
}

/// Consumes the stored nonce. Returns `None` when no authorization was begun
/// in this browser.
pub fn take_stored_state() -> Option<String> {
    use gloo_storage::{LocalStorage, Storage};

    let state: Option<String> = LocalStorage::get(STATE_STORAGE_KEY).ok();
    LocalStorage::delete(STATE_STORAGE_KEY);
    state.filter(|value| !value.is_empty())
}

/// True only when a nonce was stored and the callback echoed it back exactly.
pub fn validate_state(expected: Option<&str>, received: &str) -> bool {
    match expected {
        Some(value) => !value.is_empty() && value == received,
        None => false,
    }
}

/// Builds the GitHub authorize URL for the given client id, nonce and
/// redirect target.
pub fn authorize_url(client_id: &str, state: &str, redirect_uri: &str) -> String {
    format!(
        "https://github.com/login/oauth/authorize?client_id={client_id}&scope={}&state={state}&redirect_uri={redirect_uri}",
        percent_encode(OAUTH_SCOPE)
    )
}

/// Parses the callback query string per the redirect contract: a provider
/// `error` wins, then missing parameters, then the exchange pair.
pub fn parse_callback_query(query: &str) -> CallbackOutcome {
    let trimmed = query.trim_start_matches('?');
    let mut code = None;
    let mut state = None;
    let mut error = None;

    for pair in trimmed.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = percent_decode(parts.next().unwrap_or_default());
        match key {
            "code" if !value.is_empty() => code = Some(value),
            "state" if !value.is_empty() => state = Some(value),
            "error" if !value.is_empty() => error = Some(value),
            _ => {}
        }
    }

    if let Some(message) = error {
        return CallbackOutcome::ProviderError(message);
    }
    match (code, state) {
        (Some(code), Some(state)) => CallbackOutcome::Exchange { code, state },
        _ => CallbackOutcome::MissingParams,
    }
}

/// Random base36 nonce in the style of the provider examples.
fn generate_state() -> String {
    to_base36_fraction(js_sys::Math::random(), 10)
}

/// Renders the fractional part of `value` (in `[0, 1)`) as base36 digits.
fn to_base36_fraction(value: f64, digits: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut fraction = value.clamp(0.0, 1.0 - f64::EPSILON);
    let mut out = String::with_capacity(digits);
    for _ in 0..digits {
        fraction *= 36.0;
        let digit = fraction as usize % 36;
        out.push(ALPHABET[digit] as char);
        fraction -= fraction.floor();
    }
    out
}

/// Minimal percent-decoding for query parameter values.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                out.push(b' ');
                index += 1;
            }
            b'%' if index + 3 <= bytes.len() => {
                let hex = bytes.get(index + 1..index + 3);
                match hex.and_then(|pair| {
                    std::str::from_utf8(pair)
                        .ok()
                        .and_then(|text| u8::from_str_radix(text, 16).ok())
                }) {
                    Some(byte) => {
                        out.push(byte);
                        index += 3;
                    }
                    None => {
                        out.push(b'%');
                        index += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Minimal percent-encoding for URL query values.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mismatch_is_rejected() {
        assert!(!validate_state(Some("abc123"), "zzz999"));
        assert!(!validate_state(None, "abc123"));
        assert!(!validate_state(Some(""), ""));
        assert!(validate_state(Some("abc123"), "abc123"));
    }

    #[test]
    fn provider_error_wins_and_is_surfaced_verbatim() {
        let outcome = parse_callback_query("?code=deadbeef&state=abc&error=access_denied");
        assert_eq!(
            outcome,
            CallbackOutcome::ProviderError("access_denied".to_string())
        );
    }

    #[test]
    fn missing_code_or_state_is_rejected() {
        assert_eq!(
            parse_callback_query("?state=abc"),
            CallbackOutcome::MissingParams
        );
        assert_eq!(
            parse_callback_query("?code=deadbeef"),
            CallbackOutcome::MissingParams
        );
        assert_eq!(parse_callback_query(""), CallbackOutcome::MissingParams);
    }

    #[test]
    fn exchange_pair_is_decoded() {
        let outcome = parse_callback_query("?code=dead%20beef&state=abc123");
        assert_eq!(
            outcome,
            CallbackOutcome::Exchange {
                code: "dead beef".to_string(),
                state: "abc123".to_string(),
            }
        );
    }

    #[test]
    fn authorize_url_carries_client_state_and_redirect() {
        let url = authorize_url("client-1", "nonce", "https://app.example/auth/github/callback");
        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=client-1"));
        assert!(url.contains("state=nonce"));
        assert!(url.contains("redirect_uri=https://app.example/auth/github/callback"));
        assert!(url.contains("scope=user%3Aemail%2Cpublic_repo"));
    }

    #[test]
    fn base36_fraction_produces_requested_digits() {
        let nonce = to_base36_fraction(0.123_456_789, 10);
        assert_eq!(nonce.len(), 10);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(to_base36_fraction(0.0, 6), "000000");
    }
}
