//! Loading portfolio data files.

use std::fs;
use std::path::Path;

use crate::model::PortfolioData;

/// Errors that can occur when loading a portfolio data file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("unsupported portfolio format {extension:?} (expected toml, json, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load portfolio data from a TOML, JSON or YAML file, chosen by extension.
pub fn load_portfolio(path: &Path) -> Result<PortfolioData, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "toml" => Ok(toml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        _ => Err(LoadError::UnsupportedFormat { extension }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn loads_toml_portfolio() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
name = "Ada"
avatar_url = "/ada.png"
bio = "Engineer."

[[links]]
label = "GitHub"
url = "https://github.com/ada"
icon = "🐙"
"#,
        )
        .unwrap();

        let data = load_portfolio(&path).unwrap();
        assert_eq!(data.name, "Ada");
        assert_eq!(data.links.len(), 1);
        assert_eq!(data.links[0].label, "GitHub");
    }

    #[test]
    fn loads_yaml_portfolio() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.yaml");
        fs::write(
            &path,
            r#"
name: Ada
avatarUrl: https://example.com/ada.png
bio: Engineer.
links:
  - label: Blog
    url: https://blog.example.com
    icon: "📝"
    demoUrl: https://demo.example.com
"#,
        )
        .unwrap();

        let data = load_portfolio(&path).unwrap();
        assert_eq!(data.avatar_url, "https://example.com/ada.png");
        assert_eq!(
            data.links[0].demo_url.as_deref(),
            Some("https://demo.example.com")
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portfolio.ini");
        fs::write(&path, "name=Ada").unwrap();

        let err = load_portfolio(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnsupportedFormat { extension } if extension == "ini"
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_portfolio(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }
}
