//! Authenticated user domain types.

use serde::{Deserialize, Serialize};

use bizfolio_core::{Email, UserId, UserRole};

/// The single authenticated user of the console.
///
/// Replaced wholesale on each login or registration; removed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (`u1` for the demo account).
    pub id: UserId,
    /// The user's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Role/permission level.
    pub role: UserRole,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A successful authentication: the persisted user plus an opaque token.
///
/// User and token are co-owned; they are persisted together and
/// invalidated together on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Opaque session token.
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_camel_case_fields() {
        let user = User {
            id: UserId::new("u1"),
            email: Email::parse("demo@bizfolio.com").unwrap(),
            name: "Alex Founder".to_string(),
            role: UserRole::Admin,
            avatar: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["email"], "demo@bizfolio.com");
        // Absent avatar is omitted, not serialized as null
        assert!(json.get("avatar").is_none());
    }
}
