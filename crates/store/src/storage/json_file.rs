//! File-backed storage: one file per slot under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError, StorageKey};

/// Stores each slot as a file named `<slot>.json` under a directory.
///
/// Writes replace the whole file, matching the shim contract of whole
/// collections round-tripping on every mutation. I/O failures surface as
/// [`StorageError::Unavailable`].
#[derive(Debug)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Open (and create if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the directory cannot be
    /// created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this backend stores slots in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.slot()))
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();
        assert!(backend.read(StorageKey::Folders).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.write(StorageKey::Token, "bizfolio-1-ab12").unwrap();
        assert_eq!(
            backend.read(StorageKey::Token).unwrap().as_deref(),
            Some("bizfolio-1-ab12")
        );
        assert!(dir.path().join("bizfolio_token.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.write(StorageKey::User, "{}").unwrap();
        backend.remove(StorageKey::User).unwrap();
        backend.remove(StorageKey::User).unwrap();
        assert!(backend.read(StorageKey::User).unwrap().is_none());
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = JsonFileBackend::open(&nested).unwrap();
        assert_eq!(backend.dir(), nested.as_path());
        assert!(nested.is_dir());
    }
}
