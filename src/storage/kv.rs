// Key-value substrate behind the stats and theme documents

#[cfg(test)]
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::StoreError;

/// Minimal string key-value store
pub trait KvStore {
    /// Ok(None) when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One JSON document per key under a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_dir>/handcricket`, falling back to the working directory
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("handcricket");
        path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &path)?;

        debug!(key, bytes = value.len(), path = %path.display(), "stored value");
        Ok(())
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested"));

        assert_eq!(store.get("stats").unwrap(), None);
        store.set("stats", "{\"wins\":1}").unwrap();
        assert_eq!(store.get("stats").unwrap().as_deref(), Some("{\"wins\":1}"));

        // Temp file should not exist
        assert!(!store.dir().join("stats.tmp").exists());
        assert!(store.dir().join("stats.json").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.set("theme", "\"light\"").unwrap();
        store.set("theme", "\"dark\"").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StoreError::InvalidKey { .. })
        ));
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("stats").unwrap(), None);
        store.set("stats", "{}").unwrap();
        assert_eq!(store.get("stats").unwrap().as_deref(), Some("{}"));
    }
}
