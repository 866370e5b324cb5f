//! Build-time storage configuration with an optional runtime override. The
//! runtime config is read from `window.FORMWIZARD_CONFIG` (if present) so
//! static deployments can switch storage without rebuilding. Configuration
//! values are public; do not store secrets here.

use crate::app_lib::AppError;

/// Which browser storage area holds the drafts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageKind {
    #[default]
    Local,
    Session,
}

impl StorageKind {
    /// Parses `local` or `session`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "session" => Ok(Self::Session),
            other => Err(AppError::Config(format!(
                "unknown storage kind \"{other}\", expected local or session"
            ))),
        }
    }
}

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardConfig {
    pub storage: StorageKind,
    pub key_prefix: String,
}

impl WizardConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides.
    pub fn load() -> Result<Self, AppError> {
        let storage = option_env!("FORMWIZARD_STORAGE").unwrap_or("local");
        let key_prefix = option_env!("FORMWIZARD_KEY_PREFIX").unwrap_or("");

        let mut config = Self {
            storage: StorageKind::parse(storage)?,
            key_prefix: key_prefix.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime)?;
        }

        Ok(config)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    storage: Option<String>,
    key_prefix: Option<String>,
}

fn apply_runtime_overrides(
    config: &mut WizardConfig,
    runtime: RuntimeConfig,
) -> Result<(), AppError> {
    if let Some(value) = runtime.storage {
        config.storage = StorageKind::parse(&value)?;
    }
    if let Some(value) = runtime.key_prefix {
        config.key_prefix = value;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FORMWIZARD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        storage: read_runtime_value(&object, "storage"),
        key_prefix: read_runtime_value(&object, "key_prefix"),
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
    use super::{
        RuntimeConfig, StorageKind, WizardConfig, apply_runtime_overrides,
        normalize_runtime_value,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  signup: "),
            Some("signup:".to_string())
        );
    }

    #[test]
    fn storage_kind_parses_known_values() {
        assert_eq!(StorageKind::parse("local"), Ok(StorageKind::Local));
        assert_eq!(StorageKind::parse(" Session "), Ok(StorageKind::Session));
        assert!(StorageKind::parse("cookie").is_err());
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = WizardConfig {
            storage: StorageKind::Session,
            key_prefix: "build:".to_string(),
        };
        let runtime = RuntimeConfig {
            storage: normalize_runtime_value(""),
            key_prefix: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime).expect("overrides");

        assert_eq!(config.storage, StorageKind::Session);
        assert_eq!(config.key_prefix, "build:");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = WizardConfig::default();
        let runtime = RuntimeConfig {
            storage: normalize_runtime_value("session"),
            key_prefix: normalize_runtime_value("signup:"),
        };

        apply_runtime_overrides(&mut config, runtime).expect("overrides");

        assert_eq!(config.storage, StorageKind::Session);
        assert_eq!(config.key_prefix, "signup:");
    }

    #[test]
    fn apply_runtime_overrides_rejects_unknown_storage() {
        let mut config = WizardConfig::default();
        let runtime = RuntimeConfig {
            storage: normalize_runtime_value("indexeddb"),
            key_prefix: None,
        };

        assert!(apply_runtime_overrides(&mut config, runtime).is_err());
        assert_eq!(config.storage, StorageKind::Local);
    }
}
