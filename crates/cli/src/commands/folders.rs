//! Folder commands.

use bizfolio_core::FolderId;
use bizfolio_store::models::{FolderPatch, NewFolder};

use super::{CliError, Console, emit};

/// List all folders with live product counts.
pub async fn list(console: &Console) -> Result<(), CliError> {
    let folders = console.folders.list().await?;
    emit(&folders)
}

/// Create a folder from command-line fields.
pub async fn create(
    console: &Console,
    name: String,
    category: String,
    description: String,
    tags: Vec<String>,
    status: &str,
) -> Result<(), CliError> {
    let status = status
        .parse()
        .map_err(CliError::InvalidArgument)?;
    let folder = console
        .folders
        .create(NewFolder {
            name,
            description,
            category,
            tags,
            cover_image: None,
            status,
        })
        .await?;
    emit(&folder)
}

/// Merge a JSON patch into a folder.
pub async fn update(console: &Console, id: &str, json: &str) -> Result<(), CliError> {
    let patch: FolderPatch = serde_json::from_str(json)?;
    let folder = console.folders.update(&FolderId::new(id), patch).await?;
    emit(&folder)
}

/// Delete a folder and every product referencing it.
#[allow(clippy::print_stdout)]
pub async fn delete(console: &Console, id: &str) -> Result<(), CliError> {
    console.folders.delete(&FolderId::new(id)).await?;
    println!("Deleted folder {id} and its products.");
    Ok(())
}
