//! File-backed durable sequence store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::store::{parse_counter, SequenceStore, StoreError};

/// Durable local store holding all counters in one JSON document.
///
/// The file maps keys to decimal strings:
///
/// ```json
/// { "invoice-sequence": "12", "quotation-sequence": "3" }
/// ```
///
/// A missing or empty file is an empty store. Writes go to a sibling temp file that is
/// renamed over the original, so a crash never leaves a half-written document.
///
/// The in-process lock serializes access through one handle only. Two handles (or two
/// processes) on the same path can still interleave read-modify-write cycles.
#[derive(Debug)]
pub struct FileSequenceStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileSequenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SequenceStore for FileSequenceStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| StoreError::Unavailable("file store lock poisoned".to_string()))?;
        let entries = self.load()?;
        match entries.get(key) {
            Some(raw) => parse_counter(key, raw),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: u64) -> Result<(), StoreError> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| StoreError::Unavailable("file store lock poisoned".to_string()))?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }
}
