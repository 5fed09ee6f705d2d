//! In-memory storage backend for tests and ephemeral use.

use std::collections::HashMap;

use super::{StorageBackend, StorageError, StorageKey};

/// A backend holding slots in a process-local map. Never fails.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: HashMap<StorageKey, String>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(&key).cloned())
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.slots.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_independent() {
        let mut backend = MemoryBackend::default();
        backend.write(StorageKey::Folders, "[]").unwrap();
        backend.write(StorageKey::Products, "[1]").unwrap();

        backend.remove(StorageKey::Folders).unwrap();
        assert!(backend.read(StorageKey::Folders).unwrap().is_none());
        assert_eq!(
            backend.read(StorageKey::Products).unwrap().as_deref(),
            Some("[1]")
        );
    }
}
