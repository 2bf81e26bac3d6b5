//! Portfolio data model with validation and file loading.
//!
//! This crate defines the data shape a portfolio page renderer consumes:
//! a display name, avatar, biography and an ordered list of external links.
//! Data files can be authored in TOML, JSON or YAML.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_portfolio, LoadError};
pub use model::{Icon, PortfolioData, PortfolioLink};
pub use validate::{validate, ValidationIssue};
