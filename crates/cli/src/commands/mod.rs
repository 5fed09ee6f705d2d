//! Command implementations.
//!
//! Each module maps one subcommand family onto the store services and
//! prints record-valued results as pretty JSON.

pub mod auth;
pub mod company;
pub mod folders;
pub mod products;
pub mod stats;

use std::sync::Arc;

use thiserror::Error;

use bizfolio_core::EmailError;
use bizfolio_store::services::{
    AuthService, CompanyService, FolderService, ProductService, StatsService,
};
use bizfolio_store::{Config, ConfigError, StorageError, Store, StoreError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A service operation failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// An email argument was malformed.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// A JSON argument was malformed.
    #[error("Invalid JSON argument: {0}")]
    Json(#[from] serde_json::Error),

    /// An enum-valued argument was malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// The wired-up services behind every subcommand.
pub struct Console {
    pub auth: AuthService,
    pub company: CompanyService,
    pub folders: FolderService,
    pub products: ProductService,
    pub stats: StatsService,
}

impl Console {
    /// Open the file-backed store named by the config and wire the
    /// services over one shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the data directory cannot be
    /// created.
    pub fn open(config: &Config) -> Result<Self, CliError> {
        let store = Arc::new(Store::open(&config.data_dir)?);
        let latency = config.latency;
        Ok(Self {
            auth: AuthService::new(Arc::clone(&store), latency),
            company: CompanyService::new(Arc::clone(&store), latency),
            folders: FolderService::new(Arc::clone(&store), latency),
            products: ProductService::new(Arc::clone(&store), latency),
            stats: StatsService::new(store, latency),
        })
    }
}

/// Print a serializable record as pretty JSON.
#[allow(clippy::print_stdout)]
pub(crate) fn emit<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
