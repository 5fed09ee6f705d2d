//! Authentication service.
//!
//! Single-user authentication against the built-in demo credential pair.
//! The user and token slots are co-owned: written together on
//! login/register, removed together on logout.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

use bizfolio_core::{Email, UserId, UserRole};

use crate::error::StoreError;
use crate::models::{AuthSession, User};
use crate::storage::Store;

use super::simulate_latency;

/// Email of the built-in demo account.
pub const DEMO_EMAIL: &str = "demo@bizfolio.com";
/// Password of the built-in demo account.
pub const DEMO_PASSWORD: &str = "password";

const TOKEN_SUFFIX_LEN: usize = 8;

/// Issue an opaque session token.
///
/// Timestamp plus a random alphanumeric suffix, so rapid sequential calls
/// cannot collide the way wall-clock-only tokens did.
fn issue_token() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("bizfolio-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Authentication facade over the user and token slots.
pub struct AuthService {
    store: Arc<Store>,
    latency: Duration,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: Arc<Store>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// Authenticate with the demo credential pair.
    ///
    /// On success the user (role `admin`) and a fresh token are persisted
    /// together and returned. On failure nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCredentials`] for any credential pair
    /// other than the demo account, or [`StoreError::Storage`] if the
    /// slots cannot be written.
    pub async fn login(&self, email: &Email, password: &str) -> Result<AuthSession, StoreError> {
        simulate_latency(self.latency).await;

        if email.as_str() != DEMO_EMAIL || password != DEMO_PASSWORD {
            tracing::warn!(email = %email, "rejected login attempt");
            return Err(StoreError::InvalidCredentials);
        }

        let user = User {
            id: UserId::new("u1"),
            email: email.clone(),
            name: "Alex Founder".to_string(),
            role: UserRole::Admin,
            avatar: Some("https://picsum.photos/100/100".to_string()),
        };
        let token = issue_token();

        let mut db = self.store.lock().await;
        db.set_user(&user)?;
        db.set_token(&token)?;

        tracing::info!(user = %user.id, "login");
        Ok(AuthSession { user, token })
    }

    /// Register a new account.
    ///
    /// Always succeeds: the console is single-user, so registering simply
    /// overwrites the one persisted user slot with a fresh `user`-role
    /// account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slots cannot be written.
    pub async fn register(&self, email: Email, _password: &str) -> Result<AuthSession, StoreError> {
        simulate_latency(self.latency).await;

        let user = User {
            id: UserId::generate(),
            email,
            name: "New User".to_string(),
            role: UserRole::User,
            avatar: None,
        };
        let token = issue_token();

        let mut db = self.store.lock().await;
        db.set_user(&user)?;
        db.set_token(&token)?;

        tracing::info!(user = %user.id, "registered");
        Ok(AuthSession { user, token })
    }

    /// Remove the persisted user and token. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slots cannot be removed.
    pub async fn logout(&self) -> Result<(), StoreError> {
        simulate_latency(self.latency).await;

        let mut db = self.store.lock().await;
        db.clear_auth()?;

        tracing::info!("logout");
        Ok(())
    }

    /// The currently persisted user, if any. No simulated latency: this is
    /// the synchronous session check the view layer runs on startup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the slot cannot be read.
    pub async fn current_user(&self) -> Result<Option<User>, StoreError> {
        let db = self.store.lock().await;
        Ok(db.user()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(Arc::new(Store::in_memory()), Duration::ZERO)
    }

    fn demo_email() -> Email {
        Email::parse(DEMO_EMAIL).unwrap()
    }

    #[tokio::test]
    async fn test_demo_login_persists_admin_user() {
        let auth = service();
        let session = auth.login(&demo_email(), DEMO_PASSWORD).await.unwrap();

        assert_eq!(session.user.role, UserRole::Admin);
        assert_eq!(session.user.id.as_str(), "u1");
        assert!(session.token.starts_with("bizfolio-"));

        let current = auth.current_user().await.unwrap().unwrap();
        assert_eq!(current, session.user);
    }

    #[tokio::test]
    async fn test_bad_credentials_do_not_mutate_state() {
        let auth = service();
        let email = Email::parse("x@x.com").unwrap();

        let err = auth.login(&email, "wrong").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_for_demo_account_is_rejected() {
        let auth = service();
        let err = auth.login(&demo_email(), "hunter2").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_always_succeeds_with_user_role() {
        let auth = service();
        let email = Email::parse("new@company.com").unwrap();

        let session = auth.register(email, "whatever").await.unwrap();
        assert_eq!(session.user.role, UserRole::User);
        assert!(session.user.id.as_str().starts_with("u-"));
        assert_eq!(session.user.name, "New User");
    }

    #[tokio::test]
    async fn test_register_overwrites_single_user_slot() {
        let auth = service();
        auth.login(&demo_email(), DEMO_PASSWORD).await.unwrap();

        let email = Email::parse("second@company.com").unwrap();
        auth.register(email.clone(), "pw").await.unwrap();

        let current = auth.current_user().await.unwrap().unwrap();
        assert_eq!(current.email, email);
        assert_eq!(current.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_is_idempotent() {
        let auth = service();
        auth.login(&demo_email(), DEMO_PASSWORD).await.unwrap();

        auth.logout().await.unwrap();
        auth.logout().await.unwrap();
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_tokens_are_unique_under_rapid_logins() {
        let auth = service();
        let first = auth.login(&demo_email(), DEMO_PASSWORD).await.unwrap();
        let second = auth.login(&demo_email(), DEMO_PASSWORD).await.unwrap();
        assert_ne!(first.token, second.token);
    }
}
