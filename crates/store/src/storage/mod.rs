//! Synchronous key-value shim over pluggable backends.
//!
//! The shim owns the canonical serialized representation: one JSON-encoded
//! string slot per collection. Services never touch a backend directly;
//! they take a [`StoreGuard`] via [`Store::lock`] and perform a whole
//! read-modify-write under it. Holding the guard for the full operation is
//! what makes multi-collection mutations (the folder-delete cascade) a
//! single critical section.
//!
//! Missing slots decode to the first-run seed data, reproducing the
//! original console's behavior of serving hardcoded defaults until the
//! first write.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::models::{Company, Folder, Product, User};
use crate::seed;

/// The named string slots holding the persisted collections.
///
/// Slot names are kept identical to the original console's storage keys so
/// existing data decodes without migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    User,
    Token,
    Company,
    Folders,
    Products,
}

impl StorageKey {
    /// The slot name used by the backend.
    #[must_use]
    pub const fn slot(self) -> &'static str {
        match self {
            Self::User => "bizfolio_user",
            Self::Token => "bizfolio_token",
            Self::Company => "bizfolio_company",
            Self::Folders => "bizfolio_folders",
            Self::Products => "bizfolio_products",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slot())
    }
}

/// Errors that can occur at the storage substrate.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying substrate is unavailable (disabled, full, or failing).
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// A slot holds data that cannot be decoded.
    #[error("data corruption in {slot}: {source}")]
    Corrupt {
        /// Name of the affected slot.
        slot: &'static str,
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous string-slot backend.
///
/// Implementations must never swallow substrate failures; they surface as
/// [`StorageError::Unavailable`].
pub trait StorageBackend: Send {
    /// Read the raw string stored in a slot, if any.
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Write the raw string for a slot, replacing any previous value.
    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError>;
}

/// The shared store handle passed to every service constructor.
///
/// There is deliberately no process-wide singleton; callers construct one
/// `Store` and hand out `Arc` clones.
pub struct Store {
    backend: Mutex<Box<dyn StorageBackend>>,
}

impl Store {
    /// Wrap an arbitrary backend.
    #[must_use]
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Mutex::new(Box::new(backend)),
        }
    }

    /// Open a file-backed store rooted at `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the directory cannot be
    /// created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::new(JsonFileBackend::open(dir)?))
    }

    /// An ephemeral in-memory store (tests, demos).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Acquire exclusive access to the backend.
    ///
    /// Every read-modify-write must happen under a single guard; naive
    /// re-locking between the read and the write loses updates once
    /// callers overlap.
    pub async fn lock(&self) -> StoreGuard<'_> {
        StoreGuard {
            backend: self.backend.lock().await,
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Exclusive, typed access to the storage slots.
pub struct StoreGuard<'a> {
    backend: MutexGuard<'a, Box<dyn StorageBackend>>,
}

impl StoreGuard<'_> {
    fn read_json<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StorageError> {
        match self.backend.read(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    slot: key.slot(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize>(&mut self, key: StorageKey, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Corrupt {
            slot: key.slot(),
            source,
        })?;
        self.backend.write(key, &raw)
    }

    /// The persisted user, if someone is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    pub fn user(&self) -> Result<Option<User>, StorageError> {
        self.read_json(StorageKey::User)
    }

    /// Persist the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn set_user(&mut self, user: &User) -> Result<(), StorageError> {
        self.write_json(StorageKey::User, user)
    }

    /// The persisted session token, if any. Stored as a raw string.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read.
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        self.backend.read(StorageKey::Token)
    }

    /// Persist the session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn set_token(&mut self, token: &str) -> Result<(), StorageError> {
        self.backend.write(StorageKey::Token, token)
    }

    /// Remove the user and token slots together. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot cannot be removed.
    pub fn clear_auth(&mut self) -> Result<(), StorageError> {
        self.backend.remove(StorageKey::User)?;
        self.backend.remove(StorageKey::Token)
    }

    /// The company profile, seeding the first-run default when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    pub fn company(&self) -> Result<Company, StorageError> {
        Ok(self
            .read_json(StorageKey::Company)?
            .unwrap_or_else(seed::company))
    }

    /// Persist the company profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn set_company(&mut self, company: &Company) -> Result<(), StorageError> {
        self.write_json(StorageKey::Company, company)
    }

    /// The folder collection, seeding the first-run defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    pub fn folders(&self) -> Result<Vec<Folder>, StorageError> {
        Ok(self
            .read_json(StorageKey::Folders)?
            .unwrap_or_else(seed::folders))
    }

    /// Persist the whole folder collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn set_folders(&mut self, folders: &[Folder]) -> Result<(), StorageError> {
        self.write_json(StorageKey::Folders, &folders)
    }

    /// The product collection, seeding the first-run defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or decoded.
    pub fn products(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self
            .read_json(StorageKey::Products)?
            .unwrap_or_else(seed::products))
    }

    /// Persist the whole product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn set_products(&mut self, products: &[Product]) -> Result<(), StorageError> {
        self.write_json(StorageKey::Products, &products)
    }
}
