//! Build-time configuration for the accessor API with an optional runtime
//! override. The runtime config is read from `window.SHIPDESK_CONFIG` (if
//! present) so static deployments can change endpoints without rebuilding.
//! Configuration values are public; do not store secrets here.

use shipdesk::session::RetryPolicy;

/// Where the listener gets the accessor for a signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileSourceKind {
    /// Fixed developer-admin profile; no network.
    Demo,
    /// `GET {api_base_url}/v1/accessor` with the provider token.
    Backend,
}

impl ProfileSourceKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "demo" => Some(Self::Demo),
            "backend" => Some(Self::Backend),
            _ => None,
        }
    }
}

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub profile_source: ProfileSourceKind,
    pub lookup_attempts: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("SHIPDESK_API_BASE_URL").unwrap_or("");
        let profile_source = option_env!("SHIPDESK_PROFILE_SOURCE")
            .and_then(ProfileSourceKind::parse)
            .unwrap_or(ProfileSourceKind::Demo);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            profile_source,
            lookup_attempts: RetryPolicy::default().max_attempts,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.lookup_attempts,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    profile_source: Option<String>,
    lookup_attempts: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(kind) = runtime
        .profile_source
        .as_deref()
        .and_then(ProfileSourceKind::parse)
    {
        config.profile_source = kind;
    }
    if let Some(attempts) = runtime
        .lookup_attempts
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|attempts| *attempts > 0)
    {
        config.lookup_attempts = attempts;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SHIPDESK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        profile_source: read_runtime_value(&object, "profile_source"),
        lookup_attempts: read_runtime_value(&object, "lookup_attempts"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
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
    use super::{
        apply_runtime_overrides, normalize_runtime_value, AppConfig, ProfileSourceKind,
        RuntimeConfig,
    };

    fn default_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            profile_source: ProfileSourceKind::Demo,
            lookup_attempts: 3,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.shipdesk.dev "),
            Some("https://api.shipdesk.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            profile_source: normalize_runtime_value("  "),
            lookup_attempts: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.profile_source, ProfileSourceKind::Demo);
        assert_eq!(config.lookup_attempts, 3);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            profile_source: normalize_runtime_value("Backend"),
            lookup_attempts: normalize_runtime_value("5"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.profile_source, ProfileSourceKind::Backend);
        assert_eq!(config.retry_policy().max_attempts, 5);
    }

    #[test]
    fn apply_runtime_overrides_rejects_invalid_values() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            api_base_url: None,
            profile_source: normalize_runtime_value("ldap"),
            lookup_attempts: normalize_runtime_value("0"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.profile_source, ProfileSourceKind::Demo);
        assert_eq!(config.lookup_attempts, 3);
    }

    #[test]
    fn load_without_runtime_config_uses_build_defaults() {
        let config = AppConfig::load();
        assert!(config.lookup_attempts > 0);
    }
}
