//! Validate a portfolio data file.

use std::path::Path;

use anyhow::Result;
use vitrine_portfolio::load_portfolio;

/// Run the check command.
pub fn run(data_path: &Path) -> Result<()> {
    tracing::info!("Checking {}...", data_path.display());

    let data = load_portfolio(data_path)?;

    match data.validate() {
        Ok(()) => {
            tracing::info!(
                "{} is valid ({} link{})",
                data_path.display(),
                data.links.len(),
                if data.links.len() == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                tracing::error!("{issue}");
            }
            anyhow::bail!(
                "{} validation issue(s) in {}",
                issues.len(),
                data_path.display()
            )
        }
    }
}
