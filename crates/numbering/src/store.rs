//! Sequence counter storage abstractions.
//!
//! A [`SequenceStore`] is a string-keyed counter store. Values are persisted as decimal
//! strings (`"7"`), keyed by `<docType>-sequence`. Adapters must not interpret keys.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Sequence store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached (locked, disabled, poisoned).
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A stored value is not a non-negative decimal integer.
    #[error("corrupt counter value for '{key}': {value:?}")]
    Corrupt { key: String, value: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value store for sequence counters.
pub trait SequenceStore: Send + Sync {
    /// Short adapter name used in log events.
    fn name(&self) -> &str;

    /// Read the counter stored under `key`. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError>;

    /// Overwrite the counter stored under `key`.
    fn set(&self, key: &str, value: u64) -> Result<(), StoreError>;
}

impl<S> SequenceStore for Arc<S>
where
    S: SequenceStore + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: u64) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Parse a persisted counter value.
///
/// Blank values count as missing. Anything other than ASCII digits is corrupt.
pub(crate) fn parse_counter(key: &str, raw: &str) -> Result<Option<u64>, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let corrupt = || StoreError::Corrupt {
        key: key.to_string(),
        value: raw.to_string(),
    };

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(corrupt());
    }
    trimmed.parse::<u64>().map(Some).map_err(|_| corrupt())
}

/// Volatile in-memory store. Used as the session mirror and in tests.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value verbatim, bypassing counter formatting.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.into(), raw.into());
        }
    }

    /// Raw stored value, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.read().ok()?.get(key).cloned()
    }
}

impl SequenceStore for InMemorySequenceStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        match map.get(key) {
            Some(raw) => parse_counter(key, raw),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: u64) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
