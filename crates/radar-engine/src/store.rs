//! PersistentTriggerStore — durable `group_id -> last_trigger_time` map.
//!
//! Loaded once at construction, flushed on every trigger and on shutdown.
//! All groups share one in-memory document guarded by a single mutex; a
//! flush writes the whole document to a temp file and renames it over the
//! target, so concurrent triggers never interleave partial writes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use radar_core::errors::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Persisted record for one group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TriggerRecord {
    pub last_trigger_time: f64,
}

pub type TriggerDocument = BTreeMap<String, TriggerRecord>;

#[derive(Debug)]
pub struct PersistentTriggerStore {
    path: Option<PathBuf>,
    data: Mutex<TriggerDocument>,
}

impl PersistentTriggerStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and also treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match read_document(&path) {
            Ok(doc) => {
                info!(path = %path.display(), groups = doc.len(), "trigger store loaded");
                doc
            }
            Err(e) => {
                warn!(error = %e, "trigger store unavailable, starting empty");
                TriggerDocument::new()
            }
        };
        Self {
            path: Some(path),
            data: Mutex::new(data),
        }
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Mutex::new(TriggerDocument::new()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn last_trigger_time(&self, group_id: &str) -> Option<f64> {
        self.lock().get(group_id).map(|r| r.last_trigger_time)
    }

    /// Record a trigger in memory. The stored value only moves forward.
    pub fn record_trigger(&self, group_id: &str, timestamp: f64) {
        let mut data = self.lock();
        let entry = data.entry(group_id.to_string()).or_insert(TriggerRecord {
            last_trigger_time: timestamp,
        });
        entry.last_trigger_time = entry.last_trigger_time.max(timestamp);
    }

    /// Write the whole document atomically. No-op for in-memory stores.
    pub fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        // Hold the lock through the write so two flushes cannot race on the temp file.
        let data = self.lock();
        write_document(path, &data)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, TriggerDocument> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Read the document at `path`. A missing file yields an empty document.
/// Entries without a numeric `last_trigger_time` are skipped.
pub fn read_document(path: &Path) -> Result<TriggerDocument, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TriggerDocument::new()),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    let value: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut doc = TriggerDocument::new();
    for (group_id, record) in value {
        match record.get("last_trigger_time").and_then(|v| v.as_f64()) {
            Some(last_trigger_time) => {
                doc.insert(group_id, TriggerRecord { last_trigger_time });
            }
            None => warn!(group_id = %group_id, "skipping malformed trigger record"),
        }
    }
    Ok(doc)
}

/// Serialize `doc` to `<path>.tmp`, then rename it over `path`.
pub fn write_document(path: &Path, doc: &TriggerDocument) -> Result<(), StoreError> {
    let write_err = |message: String| StoreError::Write {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }

    let payload = serde_json::to_vec(doc).map_err(|e| write_err(e.to_string()))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, payload).map_err(|e| write_err(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PersistentTriggerStore::open(dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ this is not json").unwrap();

        assert!(matches!(read_document(&path), Err(StoreError::Corrupt { .. })));
        let store = PersistentTriggerStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn bad_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.json");
        fs::write(
            &path,
            r#"{"g1": {"last_trigger_time": 100}, "g2": {"last_trigger_time": "x"}, "g3": 5}"#,
        )
        .unwrap();

        let store = PersistentTriggerStore::open(&path);
        assert_eq!(store.len(), 1);
        assert_eq!(store.last_trigger_time("g1"), Some(100.0));
    }

    #[test]
    fn record_never_moves_backwards() {
        let store = PersistentTriggerStore::in_memory();
        store.record_trigger("g", 500.0);
        store.record_trigger("g", 100.0);
        assert_eq!(store.last_trigger_time("g"), Some(500.0));
        assert!(store.flush().is_ok());
    }

    #[test]
    fn flush_creates_parent_dirs_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/persistence.json");
        let store = PersistentTriggerStore::open(&path);
        store.record_trigger("g1", 42.5);
        store.flush().unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("nested/deeper/persistence.json.tmp").exists());
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"g1":{"last_trigger_time":42.5}}"#);
    }

    #[test]
    fn flush_into_unwritable_location_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // Parent is a regular file, so create_dir_all fails.
        let store = PersistentTriggerStore::open(blocker.join("persistence.json"));
        store.record_trigger("g", 1.0);
        assert!(matches!(store.flush(), Err(StoreError::Write { .. })));
    }
}
