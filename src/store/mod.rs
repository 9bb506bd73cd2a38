//! Key-value persistence for storefront state.
//!
//! A [`Storage`] is the raw medium: it maps string keys to string values and
//! may fail. [`PersistedStore`] sits on top of it, speaks JSON, and never
//! fails: medium errors are logged and turned into absence or dropped
//! writes. Text that is not JSON at all is deleted so the next read starts
//! clean; JSON of an unexpected shape is skipped but kept.

pub mod database;
pub mod file;
pub mod memory;
pub mod null;

pub use database::DuckDbStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use null::NullStorage;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// A string key-value persistence medium.
pub trait Storage {
    /// Return the stored text for `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Whether writes to this medium are kept at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Short description used in logs and `Display` output.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// PersistedStore
// ---------------------------------------------------------------------------

/// JSON read/write over a [`Storage`] medium.
///
/// Cloning is cheap and every clone talks to the same medium.
#[derive(Clone)]
pub struct PersistedStore {
    storage: Rc<dyn Storage>,
}

impl PersistedStore {
    pub fn new<S: Storage + 'static>(storage: S) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Wrap a medium that is already shared with other owners.
    pub fn from_shared(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// A store with no medium behind it: reads are empty, writes are dropped.
    pub fn null() -> Self {
        Self::new(NullStorage)
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_available()
    }

    pub fn describe(&self) -> String {
        self.storage.describe()
    }

    /// Read the stored text for `key` without interpreting it.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed; treating as absent");
                None
            }
        }
    }

    /// Store `value` under `key` as-is.
    pub fn write_raw(&self, key: &str, value: &str) {
        tracing::debug!(key, bytes = value.len(), "writing");
        if let Err(e) = self.storage.set_item(key, value) {
            tracing::warn!(key, error = %e, "storage write failed; value dropped");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            tracing::warn!(key, error = %e, "storage remove failed");
        }
    }

    /// Read and parse the JSON stored under `key`.
    ///
    /// Text that is not valid JSON is removed and reported as absent.
    pub fn read(&self, key: &str) -> Option<Value> {
        let text = self.read_raw(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt JSON in storage; removing");
                self.remove(key);
                None
            }
        }
    }

    /// Read the value under `key` and decode it into `T`.
    ///
    /// A value that parses but does not have the shape of `T` is reported as
    /// absent and left in place.
    pub fn read_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value has an unexpected shape; ignoring");
                None
            }
        }
    }

    /// Read the JSON array stored under `key` as raw entries.
    ///
    /// Anything other than an array reads as empty and is left in place.
    pub fn read_entries(&self, key: &str) -> Vec<Value> {
        match self.read(key) {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                tracing::warn!(key, "stored value is not an array; ignoring");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Decode the array under `key` entry by entry.
    ///
    /// Entries that do not decode into `T` are skipped; the stored array is
    /// not modified.
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_entries(key)
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "skipping undecodable entry");
                    None
                }
            })
            .collect()
    }

    /// Serialize `value` as JSON and store it under `key`.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => self.write_raw(key, &text),
            Err(e) => tracing::warn!(key, error = %e, "value could not be serialized; dropped"),
        }
    }
}

impl fmt::Debug for PersistedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedStore")
            .field("storage", &self.storage.describe())
            .finish()
    }
}
