//! Dashboard statistics service.

use std::sync::Arc;
use std::time::Duration;

use crate::error::StoreError;
use crate::models::DashboardStats;
use crate::storage::Store;

use super::simulate_latency;

/// Derives the dashboard figures from the persisted collections.
pub struct StatsService {
    store: Arc<Store>,
    latency: Duration,
}

impl StatsService {
    /// Create a new stats service.
    #[must_use]
    pub const fn new(store: Arc<Store>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// Aggregate counts over folders, products and the company profile.
    ///
    /// All four figures come from one consistent snapshot: the collections
    /// are read under a single store guard.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if a slot cannot be read.
    pub async fn dashboard(&self) -> Result<DashboardStats, StoreError> {
        simulate_latency(self.latency).await;

        let db = self.store.lock().await;
        let folders = db.folders()?;
        let products = db.products()?;
        let company = db.company()?;

        Ok(DashboardStats {
            total_folders: folders.len(),
            total_products: products.len(),
            low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
            profile_completion: company.profile_completion,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::ProductService;

    use bizfolio_core::ProductId;

    #[tokio::test]
    async fn test_dashboard_over_seed_data() {
        let store = Arc::new(Store::in_memory());
        let stats = StatsService::new(store, Duration::ZERO);

        let dashboard = stats.dashboard().await.unwrap();
        assert_eq!(dashboard.total_folders, 2);
        assert_eq!(dashboard.total_products, 3);
        // Canvas Tote (stock 5, alert 10) is the only low-stock seed product
        assert_eq!(dashboard.low_stock_count, 1);
        assert_eq!(dashboard.profile_completion, 85);
    }

    #[tokio::test]
    async fn test_dashboard_tracks_deletions() {
        let store = Arc::new(Store::in_memory());
        let products = ProductService::new(Arc::clone(&store), Duration::ZERO);
        let stats = StatsService::new(store, Duration::ZERO);

        products.delete(&ProductId::new("p2")).await.unwrap();
        let dashboard = stats.dashboard().await.unwrap();
        assert_eq!(dashboard.total_products, 2);
        assert_eq!(dashboard.low_stock_count, 0);
    }
}
