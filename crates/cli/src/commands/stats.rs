//! Dashboard command.

use super::{CliError, Console, emit};

/// Show the derived dashboard figures.
pub async fn dashboard(console: &Console) -> Result<(), CliError> {
    let stats = console.stats.dashboard().await?;
    emit(&stats)
}
