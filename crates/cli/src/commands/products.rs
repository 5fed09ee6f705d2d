//! Product commands.

use bizfolio_core::{FolderId, ProductId};
use bizfolio_store::models::{NewProduct, ProductPatch};

use super::{CliError, Console, emit};

/// List products, optionally limited to one folder.
pub async fn list(console: &Console, folder: Option<&str>) -> Result<(), CliError> {
    let products = match folder {
        Some(id) => console.products.list_by_folder(&FolderId::new(id)).await?,
        None => console.products.list().await?,
    };
    emit(&products)
}

/// Create a product from a JSON document.
pub async fn create(console: &Console, json: &str) -> Result<(), CliError> {
    let data: NewProduct = serde_json::from_str(json)?;
    let product = console.products.create(data).await?;
    emit(&product)
}

/// Merge a JSON patch into a product.
pub async fn update(console: &Console, id: &str, json: &str) -> Result<(), CliError> {
    let patch: ProductPatch = serde_json::from_str(json)?;
    let product = console.products.update(&ProductId::new(id), patch).await?;
    emit(&product)
}

/// Delete a product.
#[allow(clippy::print_stdout)]
pub async fn delete(console: &Console, id: &str) -> Result<(), CliError> {
    console.products.delete(&ProductId::new(id)).await?;
    println!("Deleted product {id}.");
    Ok(())
}
