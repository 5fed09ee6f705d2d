//! BizFolio Store - persistence shim and domain services.
//!
//! This crate is the core of the BizFolio inventory console. It owns:
//!
//! - [`storage`] - a synchronous key-value shim over pluggable backends
//!   (JSON files on disk, or in-memory for tests), one JSON-encoded slot
//!   per collection, seeded with first-run defaults
//! - [`models`] - the persisted domain entities and their patch types
//! - [`services`] - the auth, company, folder, product, and stats facades;
//!   every operation is a single read-modify-write under one lock
//! - [`config`] - environment-based configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use bizfolio_store::services::FolderService;
//! use bizfolio_store::storage::Store;
//!
//! # async fn demo() -> Result<(), bizfolio_store::StoreError> {
//! let store = Arc::new(Store::open("/var/lib/bizfolio")?);
//! let folders = FolderService::new(Arc::clone(&store), Duration::ZERO);
//! for folder in folders.list().await? {
//!     tracing::info!(id = %folder.id, count = folder.product_count, "folder");
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

pub use config::{Config, ConfigError};
pub use error::StoreError;
pub use storage::{Store, StorageError};
