//! Key-value persistence surface.
//!
//! Everything the product keeps between sessions lives under a handful of named
//! keys, each holding a JSON document. `KeyValueStore` is the only seam: the
//! dashboard, review and onboarding code never touch a backend directly, so tests
//! run against `MemoryStore` and the binary uses `JsonFileStore`.

pub mod file;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::Result;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Named keys used by the product.
pub struct StorageKey;

impl StorageKey {
    pub const OPPORTUNITIES: &'static str = "club_opportunities";
    pub const APPLICATIONS: &'static str = "applications";
    pub const CURRENT_USER: &'static str = "anchrd_user";
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: String) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads a JSON list; a missing key reads as an empty list.
pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_list<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    debug!(key, items = items.len(), "Saving list");
    store.set(key, raw)
}

pub fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    store.set(key, serde_json::to_string(value)?)
}
