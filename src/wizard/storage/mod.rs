//! Key-value persistence for step drafts.
//!
//! Each step writes its draft as a JSON blob under its own key. The backing
//! store is injected through [`KeyValueStore`] so the same controllers run
//! against browser storage, a JSON file, or memory. Reads never fail the
//! caller: a missing key, an unreadable backend, or a corrupt blob all come
//! back as `None`.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Flat string record as stored per key.
pub type Record = BTreeMap<String, String>;

pub const ACCOUNT_KEY: &str = "accountInfo";
pub const PERSONAL_KEY: &str = "personalInfo";
pub const PAYMENT_KEY: &str = "cardInfo";
/// Older builds read the payment draft from here; only ever read.
pub const PAYMENT_LEGACY_KEY: &str = "paymentInfo";
/// Single-blob layout from older builds; only read at confirmation.
pub const UNIFIED_LEGACY_KEY: &str = "formData";

/// Every key the wizard reads or writes.
pub const WIZARD_KEYS: [&str; 5] = [
    ACCOUNT_KEY,
    PERSONAL_KEY,
    PAYMENT_KEY,
    PAYMENT_LEGACY_KEY,
    UNIFIED_LEGACY_KEY,
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// String-keyed, string-valued persistence capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites any previous value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Namespaces every key with a fixed prefix, e.g. to keep several wizards
/// apart inside one origin's storage.
#[derive(Clone, Debug)]
pub struct PrefixedStore<S> {
    prefix: String,
    inner: S,
}

impl<S> PrefixedStore<S> {
    pub fn new(prefix: impl Into<String>, inner: S) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl<S: KeyValueStore> KeyValueStore for PrefixedStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.key(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let key = self.key(key);
        self.inner.set(&key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let key = self.key(key);
        self.inner.remove(&key)
    }
}

/// Serializes `record` and overwrites `key`.
///
/// # Errors
/// Returns an error if the backend rejects the write.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    record: &Record,
) -> Result<(), StoreError> {
    save_draft(store, key, record)
}

/// Reads the record under `key`, or `None` if missing or unreadable.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Record> {
    load_draft(store, key)
}

/// Typed variant of [`save`].
///
/// # Errors
/// Returns an error if serialization or the backend write fails.
pub fn save_draft<S, T>(store: &mut S, key: &str, draft: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(draft)?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "draft saved");
    Ok(())
}

/// Typed variant of [`load`]. Corrupt blobs are logged and treated as absent.
pub fn load_draft<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored draft");
            return None;
        }
        Err(err) => {
            warn!(key, error = %err, "failed to read stored draft");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(draft) => Some(draft),
        Err(err) => {
            warn!(key, error = %err, "discarding corrupt stored draft");
            None
        }
    }
}

/// Removes every wizard key.
///
/// # Errors
/// Returns the first backend error; keys before it are already removed.
pub fn clear_drafts<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    for key in WIZARD_KEYS {
        store.remove(key)?;
    }
    debug!("wizard drafts cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::drafts::AccountDraft;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn load_returns_what_save_wrote() {
        let mut store = MemoryStore::default();
        let saved = record(&[("firstName", "Jane"), ("note", "a \"quoted\" value\n")]);

        save(&mut store, PERSONAL_KEY, &saved).expect("save record");

        assert_eq!(load(&store, PERSONAL_KEY), Some(saved));
    }

    #[test]
    fn saving_twice_matches_saving_once() {
        let draft = record(&[("username", "bob")]);

        let mut once = MemoryStore::default();
        save(&mut once, ACCOUNT_KEY, &draft).expect("save once");

        let mut twice = MemoryStore::default();
        save(&mut twice, ACCOUNT_KEY, &draft).expect("save first");
        save(&mut twice, ACCOUNT_KEY, &draft).expect("save second");

        assert_eq!(once, twice);
    }

    #[test]
    fn save_overwrites_without_merging() {
        let mut store = MemoryStore::default();
        save(&mut store, ACCOUNT_KEY, &record(&[("username", "bob")])).expect("save");
        save(&mut store, ACCOUNT_KEY, &record(&[("email", "b@x.io")])).expect("save");

        assert_eq!(
            load(&store, ACCOUNT_KEY),
            Some(record(&[("email", "b@x.io")]))
        );
    }

    #[test]
    fn missing_and_corrupt_keys_are_absent() {
        let mut store = MemoryStore::default();
        assert_eq!(load(&store, ACCOUNT_KEY), None);

        for corrupt in ["{not json", "null", "[1,2]", r#"{"username":42}"#, ""] {
            store.set(ACCOUNT_KEY, corrupt).expect("seed corrupt blob");
            assert_eq!(load(&store, ACCOUNT_KEY), None, "{corrupt:?}");
            assert!(load_draft::<_, AccountDraft>(&store, ACCOUNT_KEY).is_none());
        }
    }

    #[test]
    fn prefixed_store_namespaces_keys() {
        let mut inner = MemoryStore::default();
        {
            let mut store = PrefixedStore::new("signup:", &mut inner);
            save(&mut store, ACCOUNT_KEY, &record(&[("username", "bob")])).expect("save");
            assert!(load(&store, ACCOUNT_KEY).is_some());
        }
        assert!(inner.get("signup:accountInfo").expect("get").is_some());
        assert!(inner.get(ACCOUNT_KEY).expect("get").is_none());
    }

    #[test]
    fn clear_drafts_removes_every_wizard_key() {
        let mut store = MemoryStore::default();
        for key in WIZARD_KEYS {
            store.set(key, "{}").expect("seed");
        }
        store.set("unrelated", "keep").expect("seed");

        clear_drafts(&mut store).expect("clear");

        for key in WIZARD_KEYS {
            assert!(store.get(key).expect("get").is_none(), "{key}");
        }
        assert_eq!(store.get("unrelated").expect("get").as_deref(), Some("keep"));
    }
}
