//! Status enums for the domain entities.
//!
//! Serde representations match the wire values of the original BizFolio
//! collections, so persisted JSON from a first-generation install decodes
//! without migration.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, assigned to the demo account.
    Admin,
    /// Regular self-registered user.
    #[default]
    User,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Publication status of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FolderStatus {
    #[default]
    Draft,
    Published,
}

impl std::fmt::Display for FolderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Published => write!(f, "Published"),
        }
    }
}

impl std::str::FromStr for FolderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" | "draft" => Ok(Self::Draft),
            "Published" | "published" => Ok(Self::Published),
            _ => Err(format!("invalid folder status: {s}")),
        }
    }
}

/// Kind of product being sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Physical,
    Service,
    Digital,
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Service => write!(f, "service"),
            Self::Digital => write!(f, "digital"),
        }
    }
}

impl std::str::FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical" => Ok(Self::Physical),
            "service" => Ok(Self::Service),
            "digital" => Ok(Self::Digital),
            _ => Err(format!("invalid product kind: {s}")),
        }
    }
}

/// Subscription plan of the tenant company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompanyPlan {
    #[default]
    Free,
    Pro,
    Business,
}

/// Account status of the tenant company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompanyStatus {
    Active,
    #[default]
    Pending,
    Suspended,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_wire_values() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_folder_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&FolderStatus::Published).unwrap(),
            "\"Published\""
        );
        assert_eq!(serde_json::to_string(&FolderStatus::Draft).unwrap(), "\"Draft\"");
    }

    #[test]
    fn test_product_kind_wire_values() {
        assert_eq!(
            serde_json::to_string(&ProductKind::Physical).unwrap(),
            "\"physical\""
        );
        assert_eq!(
            serde_json::to_string(&ProductKind::Digital).unwrap(),
            "\"digital\""
        );
    }

    #[test]
    fn test_round_trip_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "Published".parse::<FolderStatus>().unwrap(),
            FolderStatus::Published
        );
        assert_eq!("service".parse::<ProductKind>().unwrap(), ProductKind::Service);
        assert!("bogus".parse::<ProductKind>().is_err());
    }

    #[test]
    fn test_company_enums_wire_values() {
        assert_eq!(serde_json::to_string(&CompanyPlan::Pro).unwrap(), "\"Pro\"");
        assert_eq!(
            serde_json::to_string(&CompanyStatus::Active).unwrap(),
            "\"Active\""
        );
    }
}
