//! Session commands: login, register, logout, whoami.

use bizfolio_core::Email;

use super::{CliError, Console, emit};

/// Sign in and persist the session.
pub async fn login(console: &Console, email: &str, password: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let session = console.auth.login(&email, password).await?;
    emit(&session)
}

/// Register a new account and persist the session.
pub async fn register(console: &Console, email: &str, password: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let session = console.auth.register(email, password).await?;
    emit(&session)
}

/// Clear the persisted session.
#[allow(clippy::print_stdout)]
pub async fn logout(console: &Console) -> Result<(), CliError> {
    console.auth.logout().await?;
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user, if any.
#[allow(clippy::print_stdout)]
pub async fn whoami(console: &Console) -> Result<(), CliError> {
    match console.auth.current_user().await? {
        Some(user) => emit(&user),
        None => {
            println!("Not signed in.");
            Ok(())
        }
    }
}
