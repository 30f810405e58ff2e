//! Build-time configuration for the identity provider and backend endpoints
//! with an optional runtime override. The runtime config is read from
//! `window.VERIFLAIR_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not
//! store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub identity_provider_url: String,
    pub session_api_base_url: String,
    pub data_api_base_url: String,
    pub github_client_id: String,
    pub debug: bool,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let identity_provider_url =
            option_env!("VERIFLAIR_IDENTITY_PROVIDER_URL").unwrap_or("https://identity.ic0.app");
        let session_api_base_url = option_env!("VERIFLAIR_SESSION_API_BASE_URL")
            .or(option_env!("VERIFLAIR_API_HOST"))
            .unwrap_or("");
        let data_api_base_url = option_env!("VERIFLAIR_DATA_API_BASE_URL")
            .or(option_env!("VERIFLAIR_API_HOST"))
            .unwrap_or("");
        let github_client_id = option_env!("VERIFLAIR_GITHUB_CLIENT_ID").unwrap_or("");
        let debug = matches!(option_env!("VERIFLAIR_DEBUG"), Some("1") | Some("true"));

        let mut config = Self {
            identity_provider_url: identity_provider_url.to_string(),
            session_api_base_url: session_api_base_url.to_string(),
            data_api_base_url: data_api_base_url.to_string(),
            github_client_id: github_client_id.to_string(),
            debug,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    identity_provider_url: Option<String>,
    session_api_base_url: Option<String>,
    data_api_base_url: Option<String>,
    github_client_id: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.identity_provider_url {
        config.identity_provider_url = value;
    }
    if let Some(value) = runtime.session_api_base_url {
        config.session_api_base_url = value;
    }
    if let Some(value) = runtime.data_api_base_url {
        config.data_api_base_url = value;
    }
    if let Some(value) = runtime.github_client_id {
        config.github_client_id = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("VERIFLAIR_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        identity_provider_url: read_runtime_value(&object, "identity_provider_url"),
        session_api_base_url: read_runtime_value(&object, "session_api_base_url"),
        data_api_base_url: read_runtime_value(&object, "data_api_base_url"),
        github_client_id: read_runtime_value(&object, "github_client_id"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.veriflair.dev "),
            Some("https://api.veriflair.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            identity_provider_url: "https://identity.default".to_string(),
            session_api_base_url: "https://session.default".to_string(),
            data_api_base_url: "https://data.default".to_string(),
            github_client_id: "default-client".to_string(),
            debug: false,
        };
        let runtime = RuntimeConfig {
            identity_provider_url: normalize_runtime_value(""),
            session_api_base_url: normalize_runtime_value("  "),
            data_api_base_url: normalize_runtime_value(""),
            github_client_id: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.identity_provider_url, "https://identity.default");
        assert_eq!(config.session_api_base_url, "https://session.default");
        assert_eq!(config.data_api_base_url, "https://data.default");
        assert_eq!(config.github_client_id, "default-client");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            identity_provider_url: "https://identity.default".to_string(),
            session_api_base_url: "https://session.default".to_string(),
            data_api_base_url: "https://data.default".to_string(),
            github_client_id: "default-client".to_string(),
            debug: false,
        };
        let runtime = RuntimeConfig {
            identity_provider_url: normalize_runtime_value("https://identity.override"),
            session_api_base_url: normalize_runtime_value("https://session.override"),
            data_api_base_url: normalize_runtime_value("https://data.override"),
            github_client_id: normalize_runtime_value("override-client"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.identity_provider_url, "https://identity.override");
        assert_eq!(config.session_api_base_url, "https://session.override");
        assert_eq!(config.data_api_base_url, "https://data.override");
        assert_eq!(config.github_client_id, "override-client");
    }
}
