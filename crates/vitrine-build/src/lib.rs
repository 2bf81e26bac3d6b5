//! Build-time plumbing for vitrine sites.
//!
//! This crate resolves the short revision identifier embedded into build
//! output, loads the static-adapter configuration, and writes the build
//! metadata artifact next to the generated pages.

pub mod buildid;
pub mod config;
pub mod meta;

pub use buildid::{
    BuildIdResolver, CommandRunner, EnvSnapshot, RunnerError, SystemRunner, REVISION_ENV_VARS,
    UNKNOWN_BUILD_ID,
};
pub use config::{resolve_base_path, ConfigError, SiteConfig, BASE_PATH_VAR};
pub use meta::{write_build_meta, BuildMeta, MetaError, BUILD_META_FILE};
