//! Company profile domain types.
//!
//! The company is a singleton: one profile per tenant, mutated via partial
//! merges and never deleted. `profile_completion` is a derived score and is
//! recomputed from the five-field rule on every update rather than tracked
//! incrementally.

use serde::{Deserialize, Serialize};

use bizfolio_core::{CompanyId, CompanyPlan, CompanyStatus};

/// Points awarded per filled profile field.
const POINTS_PER_FIELD: u8 = 20;

/// A physical address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub province: String,
    pub city: String,
    pub address_line: String,
    pub postal_code: String,
    /// Optional geographic coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Social media and web presence links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Tax registration details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FiscalInfo {
    pub tax_type: String,
    pub fiscal_id: String,
    pub vat_condition: String,
    pub fiscal_address: String,
}

/// The singleton tenant company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub legal_name: String,
    pub commercial_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub industry: String,
    pub founded_year: i32,
    /// Headcount bracket, e.g. "1-10".
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub social: SocialLinks,
    pub location: Address,
    pub fiscal: FiscalInfo,
    pub plan: CompanyPlan,
    pub status: CompanyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Derived 0..=100 score; see [`Company::completion_score`].
    pub profile_completion: u8,
}

impl Company {
    /// The five-field profile completion rule.
    ///
    /// Each of legal name, contact email, location country, fiscal ID and
    /// logo URL contributes exactly 20 points when non-empty.
    #[must_use]
    pub fn completion_score(&self) -> u8 {
        let filled = [
            !self.legal_name.is_empty(),
            !self.email.is_empty(),
            !self.location.country.is_empty(),
            !self.fiscal.fiscal_id.is_empty(),
            self.logo_url.as_deref().is_some_and(|url| !url.is_empty()),
        ];
        filled
            .into_iter()
            .filter(|&present| present)
            .count()
            .saturating_mul(usize::from(POINTS_PER_FIELD))
            .try_into()
            .unwrap_or(100)
    }

    /// Merge a patch into this profile and refresh the derived score.
    pub fn apply(&mut self, patch: CompanyPatch) {
        if let Some(v) = patch.legal_name {
            self.legal_name = v;
        }
        if let Some(v) = patch.commercial_name {
            self.commercial_name = v;
        }
        if let Some(v) = patch.tagline {
            self.tagline = Some(v);
        }
        if let Some(v) = patch.industry {
            self.industry = v;
        }
        if let Some(v) = patch.founded_year {
            self.founded_year = v;
        }
        if let Some(v) = patch.size {
            self.size = v;
        }
        if let Some(v) = patch.logo_url {
            self.logo_url = Some(v);
        }
        if let Some(v) = patch.banner_url {
            self.banner_url = Some(v);
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.social {
            self.social = v;
        }
        if let Some(v) = patch.location {
            v.apply(&mut self.location);
        }
        if let Some(v) = patch.fiscal {
            v.apply(&mut self.fiscal);
        }
        if let Some(v) = patch.plan {
            self.plan = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.admin_notes {
            self.admin_notes = Some(v);
        }
        self.profile_completion = self.completion_score();
    }
}

/// Partial update for [`Address`]; merged field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressPatch {
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address_line: Option<String>,
    pub postal_code: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl AddressPatch {
    fn apply(self, address: &mut Address) {
        if let Some(v) = self.country {
            address.country = v;
        }
        if let Some(v) = self.province {
            address.province = v;
        }
        if let Some(v) = self.city {
            address.city = v;
        }
        if let Some(v) = self.address_line {
            address.address_line = v;
        }
        if let Some(v) = self.postal_code {
            address.postal_code = v;
        }
        if let Some(v) = self.coordinates {
            address.coordinates = Some(v);
        }
    }
}

/// Partial update for [`FiscalInfo`]; merged field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FiscalPatch {
    pub tax_type: Option<String>,
    pub fiscal_id: Option<String>,
    pub vat_condition: Option<String>,
    pub fiscal_address: Option<String>,
}

impl FiscalPatch {
    fn apply(self, fiscal: &mut FiscalInfo) {
        if let Some(v) = self.tax_type {
            fiscal.tax_type = v;
        }
        if let Some(v) = self.fiscal_id {
            fiscal.fiscal_id = v;
        }
        if let Some(v) = self.vat_condition {
            fiscal.vat_condition = v;
        }
        if let Some(v) = self.fiscal_address {
            fiscal.fiscal_address = v;
        }
    }
}

/// Partial update for [`Company`].
///
/// Nested `location` and `fiscal` patches merge into the existing
/// sub-records (deep merge); `social` replaces the whole block. Patches
/// set fields, they never clear them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyPatch {
    pub legal_name: Option<String>,
    pub commercial_name: Option<String>,
    pub tagline: Option<String>,
    pub industry: Option<String>,
    pub founded_year: Option<i32>,
    pub size: Option<String>,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social: Option<SocialLinks>,
    pub location: Option<AddressPatch>,
    pub fiscal: Option<FiscalPatch>,
    pub plan: Option<CompanyPlan>,
    pub status: Option<CompanyStatus>,
    pub admin_notes: Option<String>,
}
