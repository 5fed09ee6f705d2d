//! Company profile commands.

use bizfolio_store::models::CompanyPatch;

use super::{CliError, Console, emit};

/// Show the company profile.
pub async fn show(console: &Console) -> Result<(), CliError> {
    let company = console.company.get().await?;
    emit(&company)
}

/// Merge a JSON patch into the profile and show the result.
pub async fn update(console: &Console, json: &str) -> Result<(), CliError> {
    let patch: CompanyPatch = serde_json::from_str(json)?;
    let company = console.company.update(patch).await?;
    emit(&company)
}
