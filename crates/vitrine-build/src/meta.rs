//! Build metadata artifact written next to the generated pages.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the metadata artifact inside the pages output directory.
pub const BUILD_META_FILE: &str = "build-meta.json";

/// Metadata embedded alongside the built site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMeta {
    /// Short revision identifier, or "unknown"
    pub build_id: String,
}

impl BuildMeta {
    pub fn new(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
        }
    }
}

/// Errors that can occur when writing build metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("failed to write build metadata: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode build metadata: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write the metadata artifact into `pages_dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn write_build_meta(pages_dir: &Path, meta: &BuildMeta) -> Result<PathBuf, MetaError> {
    fs::create_dir_all(pages_dir)?;

    let path = pages_dir.join(BUILD_META_FILE);
    let json = serde_json::to_string_pretty(meta)?;
    fs::write(&path, json)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn writes_metadata_into_pages_dir() {
        let temp = tempdir().unwrap();
        let pages = temp.path().join("build");

        let meta = BuildMeta::new("abc1234");
        let path = write_build_meta(&pages, &meta).unwrap();

        assert_eq!(path, pages.join(BUILD_META_FILE));

        let content = fs::read_to_string(&path).unwrap();
        let back: BuildMeta = serde_json::from_str(&content).unwrap();
        assert_eq!(back, meta);
    }
}
