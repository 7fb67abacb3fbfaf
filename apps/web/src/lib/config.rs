//! Build-time configuration for the API base URL with an optional runtime
//! override. The runtime config is read from `window.SIGNUP_CONFIG` (if
//! present) so static deployments can point at another API without
//! rebuilding. Configuration values are public; do not store secrets here.

use signup_core::ApiError;
use url::Url;

/// API base used when nothing is configured at build or run time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3005";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("SIGNUP_API_BASE_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self { api_base_url };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `segments` onto the API base, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String, ApiError> {
        build_url(&self.api_base_url, segments)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SIGNUP_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
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

fn build_url(base_url: &str, segments: &[&str]) -> Result<String, ApiError> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Config("API base URL cannot have a path.".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, build_url, normalize_runtime_value};
    use signup_core::ApiError;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.signup.dev "),
            Some("https://api.signup.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
    }

    #[test]
    fn load_falls_back_to_local_api() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn build_url_joins_and_encodes_segments() {
        assert_eq!(
            build_url("http://localhost:3005", &["registration"]).ok(),
            Some("http://localhost:3005/registration".to_string())
        );
        assert_eq!(
            build_url("https://api.signup.dev/v1/", &["activation", "a b/c"]).ok(),
            Some("https://api.signup.dev/v1/activation/a%20b%2Fc".to_string())
        );
    }

    #[test]
    fn build_url_rejects_invalid_base() {
        assert!(matches!(
            build_url("not a url", &["users"]),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            build_url("mailto:team@signup.dev", &["users"]),
            Err(ApiError::Config(_))
        ));
    }
}
