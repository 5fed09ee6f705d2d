//! Derived dashboard figures.

use serde::{Deserialize, Serialize};

/// Aggregate numbers shown on the console dashboard.
///
/// Derived entirely from the persisted collections at read time; nothing
/// here is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_folders: usize,
    pub total_products: usize,
    /// Products whose stock has reached their alert threshold.
    pub low_stock_count: usize,
    /// The company's stored profile completion score.
    pub profile_completion: u8,
}
