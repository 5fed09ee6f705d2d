//! Unified error handling for the store services.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the domain services.
///
/// Every failure rejects a single operation; there is no retry, no fallback,
/// and no process-level fault. Failed updates leave the persisted
/// collections untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Login was attempted with credentials that do not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Update or delete referenced an entity id that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The storage substrate failed or returned undecodable data.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("f-missing".to_string());
        assert_eq!(err.to_string(), "not found: f-missing");

        let err = StoreError::InvalidCredentials;
        assert_eq!(err.to_string(), "invalid credentials");
    }
}
