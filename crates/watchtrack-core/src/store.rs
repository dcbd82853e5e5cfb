use anyhow::Result;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use watchtrack_config::PathManager;

/// Named-blob persistence used by the ledger.
///
/// A blob is an opaque string stored under a key. Writes replace the whole value.
pub trait BlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Copy the current blob aside before it is discarded.
    ///
    /// Returns a description of where the copy went, or `None` if there was nothing to copy.
    fn backup(&mut self, key: &str) -> io::Result<Option<String>>;
}

/// Stores each blob as `<dir>/<key>.json`
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_paths(path_manager: &PathManager) -> Result<Self> {
        let dir = path_manager.data_dir().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn backup_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json.bak", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.blob_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Blob hit: {} ({} bytes)", key, content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Blob miss: {} (file does not exist)", key);
                Ok(None)
            }
            Err(e) => {
                warn!("Failed to read blob {} at {:?}: {}", key, path, e);
                Err(e)
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, value).map_err(|e| {
            warn!("Failed to write blob {} at {:?}: {}", key, path, e);
            e
        })?;
        debug!("Blob saved: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn backup(&mut self, key: &str) -> io::Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let backup_path = self.backup_path(key);
        std::fs::copy(&path, &backup_path)?;
        info!("Backed up {:?} to {:?}", path, backup_path);
        Ok(Some(backup_path.display().to_string()))
    }
}

/// Blob store kept entirely in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(mut self, key: &str, value: impl Into<String>) -> Self {
        self.blobs.insert(key.to_string(), value.into());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backup(&mut self, key: &str) -> io::Result<Option<String>> {
        let Some(value) = self.blobs.get(key).cloned() else {
            return Ok(None);
        };
        let backup_key = format!("{}.bak", key);
        self.blobs.insert(backup_key.clone(), value);
        Ok(Some(backup_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert_eq!(store.get("watchTrackSessions").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path().join("nested"));
        store.set("k", "[1]").unwrap();
        store.set("k", "[2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[2]"));
        assert!(store.blob_path("k").ends_with("nested/k.json"));
    }

    #[test]
    fn test_file_store_backup() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path());
        assert_eq!(store.backup("k").unwrap(), None);

        store.set("k", "not json").unwrap();
        let backup = store.backup("k").unwrap().unwrap();
        assert!(backup.ends_with("k.json.bak"));
        assert_eq!(std::fs::read_to_string(dir.path().join("k.json.bak")).unwrap(), "not json");
    }

    #[test]
    fn test_from_paths_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path());
        let store = FileBlobStore::from_paths(&paths).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_memory_store_backup() {
        let mut store = MemoryBlobStore::new().with_blob("k", "oops");
        assert_eq!(store.backup("k").unwrap().as_deref(), Some("k.bak"));
        assert_eq!(store.raw("k.bak"), Some("oops"));
        assert_eq!(store.backup("missing").unwrap(), None);
    }
}
