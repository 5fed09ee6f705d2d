//! Company profile service.

use std::sync::Arc;
use std::time::Duration;

use crate::error::StoreError;
use crate::models::{Company, CompanyPatch};
use crate::storage::Store;

use super::simulate_latency;

/// Facade over the singleton company profile.
pub struct CompanyService {
    store: Arc<Store>,
    latency: Duration,
}

impl CompanyService {
    /// Create a new company service.
    #[must_use]
    pub const fn new(store: Arc<Store>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// The current profile, or the seed default before the first write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slot cannot be read.
    pub async fn get(&self) -> Result<Company, StoreError> {
        simulate_latency(self.latency).await;
        let db = self.store.lock().await;
        Ok(db.company()?)
    }

    /// Merge a partial update into the profile.
    ///
    /// Nested location/fiscal records merge field-by-field; the derived
    /// completion score is recomputed from the five-field rule before the
    /// profile is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slot cannot be read or
    /// written.
    pub async fn update(&self, patch: CompanyPatch) -> Result<Company, StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        let mut company = db.company()?;
        company.apply(patch);
        db.set_company(&company)?;

        tracing::info!(completion = company.profile_completion, "company updated");
        Ok(company)
    }
}
