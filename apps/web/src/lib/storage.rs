//! Browser storage as a [`KeyValueStore`]. When the storage area is missing
//! (disabled cookies, some private modes) the store stays usable: reads and
//! writes fail with `Unavailable`, which the wizard treats as "no draft" and
//! "not persisted".

use crate::app_lib::{AppError, config::StorageKind};
use formwizard::wizard::{KeyValueStore, PrefixedStore, StoreError};

/// The store every step page mounts against.
pub type WizardStore = PrefixedStore<WebStorage>;

#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: Option<web_sys::Storage>,
}

impl WebStorage {
    /// Opens the configured storage area of the current window.
    pub fn open(kind: StorageKind) -> Result<Self, AppError> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("no browser window".to_string()))?;
        let area = match kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        };
        match area {
            Ok(Some(storage)) => Ok(Self {
                storage: Some(storage),
            }),
            Ok(None) | Err(_) => Err(AppError::Storage(format!(
                "{kind:?} storage is not available; progress will not be saved"
            ))),
        }
    }

    /// A store with no backing area.
    pub fn detached() -> Self {
        Self { storage: None }
    }

    fn area(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("browser storage".to_string()))
    }
}

fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "browser storage rejected the operation".to_string())
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.area()?
            .get_item(key)
            .map_err(|err| StoreError::Read(js_error(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.area()?
            .set_item(key, value)
            .map_err(|err| StoreError::Write(js_error(&err)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.area()?
            .remove_item(key)
            .map_err(|err| StoreError::Write(js_error(&err)))
    }
}
