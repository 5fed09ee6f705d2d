//! Folder service.

use std::sync::Arc;
use std::time::Duration;

use bizfolio_core::FolderId;

use crate::error::StoreError;
use crate::models::{Folder, FolderPatch, NewFolder, Product};
use crate::storage::Store;

use super::simulate_latency;

fn count_for(folder: &Folder, products: &[Product]) -> usize {
    products.iter().filter(|p| p.folder_id == folder.id).count()
}

/// Facade over the folder collection.
pub struct FolderService {
    store: Arc<Store>,
    latency: Duration,
}

impl FolderService {
    /// Create a new folder service.
    #[must_use]
    pub const fn new(store: Arc<Store>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// All folders, with `product_count` recomputed against the current
    /// product collection. Stored counts are never trusted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if a slot cannot be read.
    pub async fn list(&self) -> Result<Vec<Folder>, StoreError> {
        simulate_latency(self.latency).await;

        let db = self.store.lock().await;
        let products = db.products()?;
        let folders = db
            .folders()?
            .into_iter()
            .map(|mut folder| {
                folder.product_count = count_for(&folder, &products);
                folder
            })
            .collect();
        Ok(folders)
    }

    /// Create a folder with a generated id, zero products and a fresh
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the collection cannot be read or
    /// written.
    pub async fn create(&self, data: NewFolder) -> Result<Folder, StoreError> {
        simulate_latency(self.latency).await;

        let folder = data.into_folder();
        let mut db = self.store.lock().await;
        let mut folders = db.folders()?;
        folders.push(folder.clone());
        db.set_folders(&folders)?;

        tracing::info!(id = %folder.id, name = %folder.name, "folder created");
        Ok(folder)
    }

    /// Merge a partial update into an existing folder.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent (the
    /// collection is left untouched), or [`StoreError::Storage`] on a
    /// substrate failure.
    pub async fn update(&self, id: &FolderId, patch: FolderPatch) -> Result<Folder, StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        let mut folders = db.folders()?;
        let folder = folders
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        patch.apply(folder);
        let updated = folder.clone();
        db.set_folders(&folders)?;

        tracing::info!(id = %id, "folder updated");
        Ok(updated)
    }

    /// Delete a folder and every product referencing it.
    ///
    /// Both collection writes happen under the same store guard, so no
    /// reader can observe an orphaned product between them. The product
    /// write goes first: if it fails, the folder stays in place with its
    /// products, so no product is ever left referencing a missing folder.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent, or
    /// [`StoreError::Storage`] on a substrate failure.
    pub async fn delete(&self, id: &FolderId) -> Result<(), StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        let mut folders = db.folders()?;
        let before = folders.len();
        folders.retain(|f| &f.id != id);
        if folders.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let mut products = db.products()?;
        let product_count = products.len();
        products.retain(|p| &p.folder_id != id);
        let cascaded = product_count - products.len();
        db.set_products(&products)?;
        db.set_folders(&folders)?;

        tracing::info!(id = %id, cascaded, "folder deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use crate::services::ProductService;
    use crate::storage::{MemoryBackend, StorageBackend, StorageError, StorageKey};

    use bizfolio_core::{FolderStatus, Price, ProductKind};

    fn services() -> (FolderService, ProductService) {
        let store = Arc::new(Store::in_memory());
        (
            FolderService::new(Arc::clone(&store), Duration::ZERO),
            ProductService::new(store, Duration::ZERO),
        )
    }

    fn new_folder(name: &str) -> NewFolder {
        NewFolder {
            name: name.to_string(),
            description: String::new(),
            category: "Apparel".to_string(),
            tags: vec![],
            cover_image: None,
            status: FolderStatus::Draft,
        }
    }

    fn new_product(folder_id: &FolderId, sku: &str) -> NewProduct {
        NewProduct {
            folder_id: folder_id.clone(),
            name: format!("Product {sku}"),
            sku: sku.to_string(),
            short_description: String::new(),
            long_description: String::new(),
            kind: ProductKind::Physical,
            stock: 0,
            min_stock_alert: 0,
            base_price: Price::from_cents(0),
            images: vec![],
            variants: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_recomputes_counts_from_join() {
        let (folders, products) = services();
        let f1 = FolderId::new("f1");

        // Seed starts with two products in f1
        let initial = folders.list().await.unwrap();
        let seed_f1 = initial.iter().find(|f| f.id == f1).unwrap();
        assert_eq!(seed_f1.product_count, 2);

        products.create(new_product(&f1, "NEW-001")).await.unwrap();
        let after = folders.list().await.unwrap();
        let f1_after = after.iter().find(|f| f.id == f1).unwrap();
        assert_eq!(f1_after.product_count, 3);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_persists() {
        let (folders, _) = services();
        let created = folders.create(new_folder("Winter Collection")).await.unwrap();
        assert!(created.id.as_str().starts_with("f-"));
        assert_eq!(created.product_count, 0);

        let all = folders.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|f| f.id == created.id));
    }

    #[tokio::test]
    async fn test_update_missing_folder_is_not_found() {
        let (folders, _) = services();
        let err = folders
            .update(&FolderId::new("f-missing"), FolderPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "f-missing"));

        // No partial write happened
        assert_eq!(folders.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let (folders, _) = services();
        let updated = folders
            .update(
                &FolderId::new("f2"),
                FolderPatch {
                    status: Some(FolderStatus::Published),
                    ..FolderPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, FolderStatus::Published);
        assert_eq!(updated.name, "Digital Assets");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_products() {
        let (folders, products) = services();
        folders.delete(&FolderId::new("f1")).await.unwrap();

        let remaining_folders = folders.list().await.unwrap();
        assert_eq!(remaining_folders.len(), 1);
        assert_eq!(remaining_folders.first().map(|f| f.id.as_str()), Some("f2"));

        // p1 and p2 cascaded away, p3 untouched
        let remaining_products = products.list().await.unwrap();
        assert_eq!(remaining_products.len(), 1);
        assert_eq!(remaining_products.first().map(|p| p.id.as_str()), Some("p3"));
    }

    /// Backend whose product-slot writes always fail.
    struct FailingProductWrites {
        inner: MemoryBackend,
    }

    impl StorageBackend for FailingProductWrites {
        fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
            if key == StorageKey::Products {
                return Err(StorageError::Unavailable(std::io::Error::other(
                    "disk full",
                )));
            }
            self.inner.write(key, value)
        }

        fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[tokio::test]
    async fn test_failed_cascade_write_leaves_folder_and_products_intact() {
        let store = Arc::new(Store::new(FailingProductWrites {
            inner: MemoryBackend::default(),
        }));
        let folders = FolderService::new(Arc::clone(&store), Duration::ZERO);
        let products = ProductService::new(store, Duration::ZERO);

        let err = folders.delete(&FolderId::new("f1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));

        // The folder survived, so p1/p2 still reference an existing folder
        let remaining = folders.list().await.unwrap();
        assert!(remaining.iter().any(|f| f.id.as_str() == "f1"));
        assert_eq!(products.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_missing_folder_is_not_found() {
        let (folders, products) = services();
        let err = folders.delete(&FolderId::new("f9")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(products.list().await.unwrap().len(), 3);
    }
}
