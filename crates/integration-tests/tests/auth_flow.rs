//! Login, registration and logout against the persisted session slots.

#![allow(clippy::unwrap_used)]

use bizfolio_core::{Email, UserRole};
use bizfolio_integration_tests::Harness;
use bizfolio_store::StoreError;
use bizfolio_store::services::auth::{DEMO_EMAIL, DEMO_PASSWORD};

#[tokio::test]
async fn test_demo_login_survives_reopen() {
    let harness = Harness::new();

    {
        let console = harness.console();
        let email = Email::parse(DEMO_EMAIL).unwrap();
        let session = console.auth.login(&email, DEMO_PASSWORD).await.unwrap();
        assert_eq!(session.user.role, UserRole::Admin);
    }

    let console = harness.console();
    let current = console.auth.current_user().await.unwrap().unwrap();
    assert_eq!(current.email.as_str(), DEMO_EMAIL);
    assert_eq!(current.role, UserRole::Admin);
}

#[tokio::test]
async fn test_rejected_login_does_not_touch_the_session_slots() {
    let harness = Harness::new();
    let console = harness.console();

    let email = Email::parse("x@x.com").unwrap();
    let err = console.auth.login(&email, "wrong").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidCredentials));
    assert!(console.auth.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_logout_clears_a_persisted_session() {
    let harness = Harness::new();

    {
        let console = harness.console();
        let email = Email::parse(DEMO_EMAIL).unwrap();
        console.auth.login(&email, DEMO_PASSWORD).await.unwrap();
        console.auth.logout().await.unwrap();
    }

    let console = harness.console();
    assert!(console.auth.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_replaces_the_demo_session() {
    let harness = Harness::new();
    let console = harness.console();

    let demo = Email::parse(DEMO_EMAIL).unwrap();
    console.auth.login(&demo, DEMO_PASSWORD).await.unwrap();

    let fresh = Email::parse("founder@newco.io").unwrap();
    let session = console.auth.register(fresh.clone(), "pw").await.unwrap();
    assert_eq!(session.user.role, UserRole::User);

    let current = console.auth.current_user().await.unwrap().unwrap();
    assert_eq!(current.email, fresh);
}
