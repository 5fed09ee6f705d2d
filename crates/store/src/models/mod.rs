//! Persisted domain entities and their patch types.
//!
//! All entities serialize with camelCase field names so the JSON written to
//! storage matches the original console's collections byte-for-byte in
//! structure.
//!
//! Patch types follow one explicit merge policy: `None` means "leave the
//! field unchanged", `Some` sets it. Nested company sub-records (location,
//! fiscal) merge field-by-field; everything else, including the social
//! links block and product image/variant lists, is replaced wholesale.

pub mod company;
pub mod folder;
pub mod product;
pub mod stats;
pub mod user;

pub use company::{
    Address, AddressPatch, Company, CompanyPatch, Coordinates, FiscalInfo, FiscalPatch,
    SocialLinks,
};
pub use folder::{Folder, FolderPatch, NewFolder};
pub use product::{NewProduct, Product, ProductImage, ProductPatch, ProductVariant};
pub use stats::DashboardStats;
pub use user::{AuthSession, User};
