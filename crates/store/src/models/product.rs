//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bizfolio_core::{FolderId, ImageId, Price, ProductId, ProductKind, VariantId};

/// An image attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ImageId,
    pub url: String,
    /// Flagged for display as the product's thumbnail. At most one image
    /// per product carries this flag; see [`ProductImage::normalize_primary`].
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl ProductImage {
    /// Enforce the primary-image invariant over an image list.
    ///
    /// When images exist and none is primary, the first becomes primary.
    /// When several are flagged, only the first keeps the flag.
    pub fn normalize_primary(images: &mut [Self]) {
        let mut seen_primary = false;
        for image in images.iter_mut() {
            if image.is_primary {
                if seen_primary {
                    image.is_primary = false;
                }
                seen_primary = true;
            }
        }
        if !seen_primary {
            if let Some(first) = images.first_mut() {
                first.is_primary = true;
            }
        }
    }
}

/// A sellable variation of a product, e.g. "Red / XL".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: VariantId,
    pub name: String,
    pub price: Price,
    pub stock: u32,
    pub sku: String,
}

/// A product belonging to exactly one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Required foreign key; deleting the folder cascades to this product.
    pub folder_id: FolderId,
    pub name: String,
    pub sku: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    pub stock: u32,
    pub min_stock_alert: u32,
    pub base_price: Price,
    pub images: Vec<ProductImage>,
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether current stock has reached the alert threshold.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock_alert
    }
}

/// Input for creating a product; id and timestamps are assigned by the
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub folder_id: FolderId,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(rename = "type", default)]
    pub kind: ProductKind,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub min_stock_alert: u32,
    #[serde(default)]
    pub base_price: Price,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl NewProduct {
    /// Materialize the product with a generated id, fresh timestamps and a
    /// normalized image list.
    #[must_use]
    pub fn into_product(self) -> Product {
        let now = Utc::now();
        let mut images = self.images;
        ProductImage::normalize_primary(&mut images);
        Product {
            id: ProductId::generate(),
            folder_id: self.folder_id,
            name: self.name,
            sku: self.sku,
            short_description: self.short_description,
            long_description: self.long_description,
            kind: self.kind,
            stock: self.stock,
            min_stock_alert: self.min_stock_alert,
            base_price: self.base_price,
            images,
            variants: self.variants,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for [`Product`]. `None` leaves the field unchanged;
/// image and variant lists are replaced wholesale when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub folder_id: Option<FolderId>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ProductKind>,
    pub stock: Option<u32>,
    pub min_stock_alert: Option<u32>,
    pub base_price: Option<Price>,
    pub images: Option<Vec<ProductImage>>,
    pub variants: Option<Vec<ProductVariant>>,
}

impl ProductPatch {
    /// Merge this patch into an existing product and re-normalize the
    /// image list. The `updated_at` bump is owned by the service.
    pub fn apply(self, product: &mut Product) {
        if let Some(v) = self.folder_id {
            product.folder_id = v;
        }
        if let Some(v) = self.name {
            product.name = v;
        }
        if let Some(v) = self.sku {
            product.sku = v;
        }
        if let Some(v) = self.short_description {
            product.short_description = v;
        }
        if let Some(v) = self.long_description {
            product.long_description = v;
        }
        if let Some(v) = self.kind {
            product.kind = v;
        }
        if let Some(v) = self.stock {
            product.stock = v;
        }
        if let Some(v) = self.min_stock_alert {
            product.min_stock_alert = v;
        }
        if let Some(v) = self.base_price {
            product.base_price = v;
        }
        if let Some(v) = self.images {
            product.images = v;
        }
        if let Some(v) = self.variants {
            product.variants = v;
        }
        ProductImage::normalize_primary(&mut product.images);
    }
}
