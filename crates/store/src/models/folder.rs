//! Folder domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bizfolio_core::{FolderId, FolderStatus};

/// A named container grouping products, analogous to a catalog category.
///
/// `product_count` is derived: readers recompute it as a join against the
/// product collection and never trust a stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub status: FolderStatus,
    /// Count of products referencing this folder; recomputed at read time.
    pub product_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a folder; id, timestamp and count are assigned by
/// the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub status: FolderStatus,
}

impl NewFolder {
    /// Materialize the folder with a generated id and creation timestamp.
    #[must_use]
    pub fn into_folder(self) -> Folder {
        Folder {
            id: FolderId::generate(),
            name: self.name,
            description: self.description,
            category: self.category,
            tags: self.tags,
            cover_image: self.cover_image,
            status: self.status,
            product_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for [`Folder`]. `None` leaves the field unchanged.
///
/// The derived `product_count` and the creation timestamp are not
/// patchable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FolderPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub status: Option<FolderStatus>,
}

impl FolderPatch {
    /// Merge this patch into an existing folder.
    pub fn apply(self, folder: &mut Folder) {
        if let Some(v) = self.name {
            folder.name = v;
        }
        if let Some(v) = self.description {
            folder.description = v;
        }
        if let Some(v) = self.category {
            folder.category = v;
        }
        if let Some(v) = self.tags {
            folder.tags = v;
        }
        if let Some(v) = self.cover_image {
            folder.cover_image = Some(v);
        }
        if let Some(v) = self.status {
            folder.status = v;
        }
    }
}
