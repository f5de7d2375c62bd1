//! Key-value storage backing the session store.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
};

use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error")]
    Io(#[from] io::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Durable client-side string storage, keyed by namespace.
///
/// Implementations must be cheap to call synchronously; every session read
/// goes through [`SessionStorage::get`].
#[automock]
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_poisoned| StorageError::Poisoned)?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_poisoned| StorageError::Poisoned)?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_poisoned| StorageError::Poisoned)?;

        entries.remove(key);

        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        // Readers must never observe a half-written session.
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&staging, value)?;
        fs::rename(&staging, &target)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() -> TestResult {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("user")?, None);

        storage.set("user", "{}")?;

        assert_eq!(storage.get("user")?.as_deref(), Some("{}"));

        storage.remove("user")?;
        storage.remove("user")?;

        assert_eq!(storage.get("user")?, None);

        Ok(())
    }

    #[test]
    fn memory_storage_keys_are_independent() -> TestResult {
        let storage = MemoryStorage::new();

        storage.set("user", "storefront")?;
        storage.set("admin", "console")?;
        storage.remove("user")?;

        assert_eq!(storage.get("admin")?.as_deref(), Some("console"));

        Ok(())
    }

    #[test]
    fn file_storage_creates_directory_and_persists() -> TestResult {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::new(root.path().join("sessions"));

        storage.set("admin", r#"{"id":1}"#)?;

        let reopened = FileStorage::new(root.path().join("sessions"));

        assert_eq!(reopened.get("admin")?.as_deref(), Some(r#"{"id":1}"#));

        Ok(())
    }

    #[test]
    fn file_storage_missing_key_is_absent() -> TestResult {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::new(root.path());

        assert_eq!(storage.get("user")?, None);

        Ok(())
    }

    #[test]
    fn file_storage_remove_is_idempotent() -> TestResult {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::new(root.path());

        storage.set("user", "value")?;
        storage.remove("user")?;
        storage.remove("user")?;

        assert_eq!(storage.get("user")?, None);
        assert!(!root.path().join("user.json").exists());

        Ok(())
    }
}
