//! Vitrine CLI - portfolio site build toolkit.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Short revision identifier resolved when this binary was compiled.
pub const BUILD_ID: &str = env!("VITRINE_BUILD_ID");

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (build ",
    env!("VITRINE_BUILD_ID"),
    ")"
);

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Portfolio site build toolkit")]
#[command(version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vitrine.toml config file
    #[arg(short, long, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a portfolio project in the current directory
    Init {
        /// Skip interactive prompts, overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate a portfolio data file
    Check {
        /// Portfolio data file (toml, json or yaml)
        #[arg(short, long, default_value = "portfolio.toml")]
        data: PathBuf,
    },

    /// Resolve the build identifier and write build metadata
    Stamp {
        /// Print the identifier instead of writing build-meta.json
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    tracing::debug!("vitrine {} (build {})", env!("CARGO_PKG_VERSION"), BUILD_ID);

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
        Commands::Check { data } => {
            commands::check::run(&data)?;
        }
        Commands::Stamp { print } => {
            commands::stamp::run(&cli.config, print)?;
        }
    }

    Ok(())
}
