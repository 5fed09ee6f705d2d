//! Shared harness for BizFolio integration tests.
//!
//! Each test gets its own temporary data directory; opening a console
//! twice on the same harness simulates a process restart against the same
//! persisted state.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use bizfolio_store::Store;
use bizfolio_store::services::{
    AuthService, CompanyService, FolderService, ProductService, StatsService,
};

/// A temporary data directory hosting a file-backed store.
pub struct Harness {
    dir: TempDir,
}

impl Harness {
    /// Create a fresh, empty data directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Open the services over the harness directory.
    ///
    /// Calling this again models a process restart: a new store handle
    /// over the same files.
    #[must_use]
    pub fn console(&self) -> Console {
        let store = Arc::new(Store::open(self.dir.path()).unwrap());
        Console {
            auth: AuthService::new(Arc::clone(&store), Duration::ZERO),
            company: CompanyService::new(Arc::clone(&store), Duration::ZERO),
            folders: FolderService::new(Arc::clone(&store), Duration::ZERO),
            products: ProductService::new(Arc::clone(&store), Duration::ZERO),
            stats: StatsService::new(store, Duration::ZERO),
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// The five services wired over one shared store handle.
pub struct Console {
    pub auth: AuthService,
    pub company: CompanyService,
    pub folders: FolderService,
    pub products: ProductService,
    pub stats: StatsService,
}
