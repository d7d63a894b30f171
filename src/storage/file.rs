//! File-backed storage backend.
//!
//! One file per key under a profile directory, written atomically via
//! tmp + rename so an interrupted write never leaves a half-replaced
//! record behind.

use std::path::{Path, PathBuf};

use super::Storage;
use crate::{BodegaError, Result};

/// Durable storage keeping each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the default profile store: `<data dir>/bodega`.
    pub fn default_profile() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".local-data"))
            .join("bodega");
        Self::open(root)
    }

    /// Directory holding this store's records.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BodegaError::Storage(format!("failed to read key {key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            BodegaError::Storage(format!(
                "failed to create storage dir {}: {e}",
                self.root.display()
            ))
        })?;

        // Write to tmp file first, then rename for atomicity
        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|e| {
            BodegaError::Storage(format!("failed to write key {key}: {e}"))
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|e| {
            BodegaError::Storage(format!("failed to replace key {key}: {e}"))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BodegaError::Storage(format!(
                "failed to remove key {key}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_root_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path().join("deep").join("nested"));
        store.set("cart-storage", "{}").unwrap();
        assert!(dir.path().join("deep/nested/cart-storage.json").exists());
    }

    #[test]
    fn get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path());
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path());
        store.set("k", r#"{"items":[]}"#).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(r#"{"items":[]}"#));
    }

    #[test]
    fn set_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path());
        store.set("k", "old").unwrap();
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn remove_deletes_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn no_tmp_file_left_after_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path());
        store.set("k", "v").unwrap();
        assert!(!dir.path().join("k.json.tmp").exists());
    }
}
