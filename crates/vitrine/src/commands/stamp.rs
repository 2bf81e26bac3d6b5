//! Resolve the build identifier and write build metadata.

use std::path::Path;

use anyhow::Result;
use vitrine_build::{
    resolve_base_path, write_build_meta, BuildIdResolver, BuildMeta, EnvSnapshot, SiteConfig,
};

/// Run the stamp command.
pub fn run(config_path: &Path, print: bool) -> Result<()> {
    let build_id = BuildIdResolver::from_process().resolve();

    if print {
        println!("{build_id}");
        return Ok(());
    }

    let config = SiteConfig::load(config_path)?;

    let base_path = resolve_base_path(&EnvSnapshot::from_process());
    if !base_path.is_empty() {
        tracing::info!("Site will be served under base path {base_path:?}");
    }

    let meta = BuildMeta::new(build_id);
    let path = write_build_meta(Path::new(&config.pages), &meta)?;

    tracing::info!("Wrote {} (build {})", path.display(), meta.build_id);

    Ok(())
}
