//! First-run seed data.
//!
//! Served by the shim whenever a slot is missing, reproducing the original
//! console's first-run state: one company (`c1`), two folders (`f1`, `f2`)
//! and three products (`p1`, `p2` in `f1`; `p3` in `f2`). Field values are
//! kept identical to the original collections.

use chrono::Utc;

use bizfolio_core::{
    CompanyId, CompanyPlan, CompanyStatus, FolderId, FolderStatus, ImageId, Price, ProductId,
    ProductKind,
};

use crate::models::{
    Address, Company, FiscalInfo, Folder, Product, ProductImage, SocialLinks,
};

/// The seed company profile.
#[must_use]
pub fn company() -> Company {
    Company {
        id: CompanyId::new("c1"),
        legal_name: "Acme Innovations Ltd.".to_string(),
        commercial_name: "Acme Studio".to_string(),
        tagline: None,
        industry: "Technology".to_string(),
        founded_year: 2020,
        size: "1-10".to_string(),
        logo_url: None,
        banner_url: None,
        email: "contact@acme.com".to_string(),
        phone: "+1 555 0123".to_string(),
        social: SocialLinks {
            website: Some("https://acme.com".to_string()),
            ..SocialLinks::default()
        },
        location: Address {
            country: "USA".to_string(),
            province: "California".to_string(),
            city: "San Francisco".to_string(),
            address_line: "123 Innovation Dr".to_string(),
            postal_code: "94103".to_string(),
            coordinates: None,
        },
        fiscal: FiscalInfo {
            tax_type: "Corporation".to_string(),
            fiscal_id: "US-99887766".to_string(),
            vat_condition: "Registered".to_string(),
            fiscal_address: "Same as location".to_string(),
        },
        plan: CompanyPlan::Pro,
        status: CompanyStatus::Active,
        admin_notes: None,
        // Stored value from the original seed; recomputed on first update
        profile_completion: 85,
    }
}

/// The two seed folders.
#[must_use]
pub fn folders() -> Vec<Folder> {
    vec![
        Folder {
            id: FolderId::new("f1"),
            name: "Summer Collection 2024".to_string(),
            description: "New arrivals for the summer season".to_string(),
            category: "Apparel".to_string(),
            tags: vec!["summer".to_string(), "beach".to_string(), "new".to_string()],
            cover_image: Some("https://picsum.photos/400/300?random=1".to_string()),
            status: FolderStatus::Published,
            product_count: 2,
            created_at: Utc::now(),
        },
        Folder {
            id: FolderId::new("f2"),
            name: "Digital Assets".to_string(),
            description: "Downloadable templates".to_string(),
            category: "Digital".to_string(),
            tags: vec!["templates".to_string(), "pdf".to_string()],
            cover_image: Some("https://picsum.photos/400/300?random=2".to_string()),
            status: FolderStatus::Draft,
            product_count: 1,
            created_at: Utc::now(),
        },
    ]
}

/// The three seed products; `p1` and `p2` reference `f1`, `p3` references
/// `f2`.
#[must_use]
pub fn products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product {
            id: ProductId::new("p1"),
            folder_id: FolderId::new("f1"),
            name: "Sunset T-Shirt".to_string(),
            sku: "TSH-001".to_string(),
            short_description: "Cotton beach t-shirt".to_string(),
            long_description: "High quality 100% cotton t-shirt perfect for summer days."
                .to_string(),
            kind: ProductKind::Physical,
            stock: 45,
            min_stock_alert: 10,
            base_price: Price::from_cents(2999),
            images: vec![ProductImage {
                id: ImageId::new("img1"),
                url: "https://picsum.photos/300/300?random=3".to_string(),
                is_primary: true,
                metadata: None,
            }],
            variants: vec![],
            created_at: now,
            updated_at: now,
        },
        Product {
            id: ProductId::new("p2"),
            folder_id: FolderId::new("f1"),
            name: "Canvas Tote".to_string(),
            sku: "TOT-002".to_string(),
            short_description: "Durable canvas bag".to_string(),
            long_description: "Eco-friendly tote bag.".to_string(),
            kind: ProductKind::Physical,
            stock: 5,
            min_stock_alert: 10,
            base_price: Price::from_cents(1500),
            images: vec![ProductImage {
                id: ImageId::new("img2"),
                url: "https://picsum.photos/300/300?random=4".to_string(),
                is_primary: true,
                metadata: None,
            }],
            variants: vec![],
            created_at: now,
            updated_at: now,
        },
        Product {
            id: ProductId::new("p3"),
            folder_id: FolderId::new("f2"),
            name: "Business Plan Template".to_string(),
            sku: "DIG-001".to_string(),
            short_description: "PDF Template".to_string(),
            long_description: "Complete business plan structure.".to_string(),
            kind: ProductKind::Digital,
            stock: 999,
            min_stock_alert: 0,
            base_price: Price::from_cents(4900),
            images: vec![ProductImage {
                id: ImageId::new("img3"),
                url: "https://picsum.photos/300/300?random=5".to_string(),
                is_primary: true,
                metadata: None,
            }],
            variants: vec![],
            created_at: now,
            updated_at: now,
        },
    ]
}
