//! Initialize a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    // Create default config
    let config_path = Path::new("vitrine.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write vitrine.toml")?;
        tracing::info!("Created vitrine.toml");
    } else {
        tracing::warn!("vitrine.toml already exists. Use --yes to overwrite.");
    }

    // Create starter portfolio data
    let data_path = Path::new("portfolio.toml");
    if !data_path.exists() || yes {
        fs::write(data_path, DEFAULT_PORTFOLIO).context("Failed to write portfolio.toml")?;
        tracing::info!("Created portfolio.toml");
    } else {
        tracing::warn!("portfolio.toml already exists. Use --yes to overwrite.");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit portfolio.toml, then run 'vitrine check' to validate it.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitrine Configuration

# Output directory for generated pages
pages = "build"

# Output directory for static assets
assets = "build"

# Fallback page for client-side routing
fallback = "404.html"

# Precompress output files
precompress = false

# Fail the build when a page cannot be generated
strict = true
"#;

const DEFAULT_PORTFOLIO: &str = r#"# Portfolio data consumed by the page renderer.

name = "Your Name"
avatar_url = "/avatar.png"
bio = "A short biography."

[[links]]
label = "GitHub"
url = "https://github.com/your-handle"
icon = "🐙"

[[links]]
label = "Project"
url = "https://github.com/your-handle/project"
icon = "🚀"
demo_url = "https://your-handle.github.io/project"
"#;
