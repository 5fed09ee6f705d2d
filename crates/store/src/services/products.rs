//! Product service.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use bizfolio_core::{FolderId, ProductId};

use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::storage::Store;

use super::simulate_latency;

/// Facade over the product collection.
pub struct ProductService {
    store: Arc<Store>,
    latency: Duration,
}

impl ProductService {
    /// Create a new product service.
    #[must_use]
    pub const fn new(store: Arc<Store>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// All products.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slot cannot be read.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        simulate_latency(self.latency).await;
        let db = self.store.lock().await;
        Ok(db.products()?)
    }

    /// Products belonging to one folder.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slot cannot be read.
    pub async fn list_by_folder(&self, folder_id: &FolderId) -> Result<Vec<Product>, StoreError> {
        simulate_latency(self.latency).await;
        let db = self.store.lock().await;
        let mut products = db.products()?;
        products.retain(|p| &p.folder_id == folder_id);
        Ok(products)
    }

    /// Create a product with a generated id, fresh timestamps and a
    /// normalized image list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the collection cannot be read or
    /// written.
    pub async fn create(&self, data: NewProduct) -> Result<Product, StoreError> {
        simulate_latency(self.latency).await;

        let product = data.into_product();
        let mut db = self.store.lock().await;
        let mut products = db.products()?;
        products.push(product.clone());
        db.set_products(&products)?;

        tracing::info!(id = %product.id, folder = %product.folder_id, "product created");
        Ok(product)
    }

    /// Merge a partial update into an existing product, bumping
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent (the
    /// collection is left untouched), or [`StoreError::Storage`] on a
    /// substrate failure.
    pub async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        let mut products = db.products()?;
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        patch.apply(product);
        product.updated_at = Utc::now();
        let updated = product.clone();
        db.set_products(&products)?;

        tracing::info!(id = %id, "product updated");
        Ok(updated)
    }

    /// Delete a product by id. Products have no dependents, so there is no
    /// cascade.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent, or
    /// [`StoreError::Storage`] on a substrate failure.
    pub async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        let mut products = db.products()?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        db.set_products(&products)?;

        tracing::info!(id = %id, "product deleted");
        Ok(())
    }
}
