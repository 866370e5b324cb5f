use crate::wizard::{JsonFileStore, PrefixedStore};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub store_path: PathBuf,
    pub key_prefix: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            key_prefix: String::new(),
        }
    }

    pub fn set_key_prefix(&mut self, prefix: impl Into<String>) {
        self.key_prefix = prefix.into();
    }

    /// Opens the draft file, namespaced with the configured key prefix.
    ///
    /// # Errors
    /// Returns an error if the file exists but is not a JSON object of strings.
    pub fn open_store(&self) -> Result<PrefixedStore<JsonFileStore>> {
        let file = JsonFileStore::open(&self.store_path)
            .with_context(|| format!("failed to open {}", self.store_path.display()))?;
        Ok(PrefixedStore::new(self.key_prefix.clone(), file))
    }
}
