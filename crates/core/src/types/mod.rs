//! Core type definitions.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{CompanyId, FolderId, ImageId, ProductId, UserId, VariantId};
pub use price::Price;
pub use status::{CompanyPlan, CompanyStatus, FolderStatus, ProductKind, UserRole};
