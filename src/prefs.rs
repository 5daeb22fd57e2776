//! Per-user preference records and the stores that hold them.
//!
//! Records are overwritten whole on each update; there is no partial
//! merge. A missing record means "use the admin defaults".

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TableStyle;

/// One user's stored rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    pub show_links_below: bool,
    /// Unset defers to the admin-configured style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TableStyle>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference record encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Narrow key-value surface over whatever holds the records.
pub trait PrefStore {
    fn get(&self, user_id: &str) -> Result<Option<UserPreference>, StoreError>;
    fn put(&self, user_id: &str, pref: &UserPreference) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, UserPreference>>,
}

impl PrefStore for MemoryStore {
    fn get(&self, user_id: &str) -> Result<Option<UserPreference>, StoreError> {
        Ok(self
            .records
            .read()
            .expect("preference lock")
            .get(user_id)
            .cloned())
    }

    fn put(&self, user_id: &str, pref: &UserPreference) -> Result<(), StoreError> {
        self.records
            .write()
            .expect("preference lock")
            .insert(user_id.to_string(), pref.clone());
        Ok(())
    }
}

/// All records in one JSON file, rewritten whole on each update.
///
/// A missing file reads as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, UserPreference>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl PrefStore for JsonFileStore {
    fn get(&self, user_id: &str) -> Result<Option<UserPreference>, StoreError> {
        Ok(self.load()?.remove(user_id))
    }

    fn put(&self, user_id: &str, pref: &UserPreference) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.insert(user_id.to_string(), pref.clone());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }
}
