//! BizFolio Core - Shared types library.
//!
//! This crate provides common types used across all BizFolio components:
//! - `store` - Persistence shim and domain services
//! - `cli` - Command-line console over the services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
