//! Domain service facades over the storage shim.
//!
//! # Services
//!
//! - `auth` - login/register/logout against the single persisted user slot
//! - `company` - singleton profile reads and partial-merge updates
//! - `folders` - folder CRUD with read-time product counts and cascading
//!   delete
//! - `products` - product CRUD
//! - `stats` - derived dashboard figures
//!
//! Every service takes an explicit `Arc<Store>` plus a simulated-latency
//! duration, sleeps the latency, then performs exactly one
//! read-modify-write under a single store guard. Errors surface directly
//! to the caller; there is no retry and no fallback.

pub mod auth;
pub mod company;
pub mod folders;
pub mod products;
pub mod stats;

pub use auth::AuthService;
pub use company::CompanyService;
pub use folders::FolderService;
pub use products::ProductService;
pub use stats::StatsService;

use std::time::Duration;

/// Cooperative suspension standing in for network latency.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
