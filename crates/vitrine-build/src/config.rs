//! Static-adapter site configuration (`vitrine.toml`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::buildid::EnvSnapshot;

/// Env var carrying the base path prefix.
///
/// Set in CI for project sites served under a sub-path (e.g. "/repo-name"
/// on GitHub Pages); unset locally, where the prefix is empty.
pub const BASE_PATH_VAR: &str = "BASE_PATH";

/// Configuration handed to the static deploy adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Output directory for generated pages
    #[serde(default = "default_pages")]
    pub pages: String,

    /// Output directory for static assets
    #[serde(default = "default_assets")]
    pub assets: String,

    /// Fallback page for client-side routing (SPA mode)
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Precompress output files
    #[serde(default)]
    pub precompress: bool,

    /// Fail the build when a page cannot be generated
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_pages() -> String {
    "build".to_string()
}
fn default_assets() -> String {
    "build".to_string()
}
fn default_fallback() -> String {
    "404.html".to_string()
}
fn default_strict() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            assets: default_assets(),
            fallback: default_fallback(),
            precompress: false,
            strict: default_strict(),
        }
    }
}

/// Errors that can occur when loading the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SiteConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. A malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Resolve the base path prefix from the environment.
///
/// Returns the empty string when the variable is unset, matching local
/// development where pages are served from the site root.
pub fn resolve_base_path(env: &EnvSnapshot) -> String {
    env.get(BASE_PATH_VAR).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_adapter_conventions() {
        let config = SiteConfig::default();

        assert_eq!(config.pages, "build");
        assert_eq!(config.assets, "build");
        assert_eq!(config.fallback, "404.html");
        assert!(!config.precompress);
        assert!(config.strict);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = SiteConfig::load(&temp.path().join("vitrine.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vitrine.toml");
        fs::write(&path, "pages = \"dist\"\nprecompress = true\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.pages, "dist");
        assert!(config.precompress);
        assert_eq!(config.fallback, "404.html");
        assert!(config.strict);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vitrine.toml");
        fs::write(&path, "pages = [not toml").unwrap();

        assert!(matches!(
            SiteConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn base_path_defaults_to_empty() {
        let env = EnvSnapshot::default();
        assert_eq!(resolve_base_path(&env), "");
    }

    #[test]
    fn base_path_read_from_env() {
        let env: EnvSnapshot = [(BASE_PATH_VAR, "/my-site")].into_iter().collect();
        assert_eq!(resolve_base_path(&env), "/my-site");
    }
}
