//! Marquee CLI library.
//!
//! This library provides the core functionality for the Marquee command-line interface,
//! including configuration management, the JSON film catalog, command execution, and
//! output formatting.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use catalog::JsonCatalog;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use marquee_domain::RuleBase;
use marquee_engine::{EngineConfig, InferenceEngine};
use std::path::Path;

/// Load the rule base from `path`, or the bundled film-quality rules.
///
/// `block` selects a function block in the file; the first block is used
/// when it is `None`.
pub fn load_rule_base(path: Option<&Path>, block: Option<&str>) -> Result<RuleBase> {
    match path {
        Some(path) => Ok(marquee_rules::load_file(path, block)?),
        None => Ok(marquee_rules::film_quality()?),
    }
}

/// Build an inference engine over a rule base.
pub fn build_engine(rule_base: RuleBase, config: &EngineConfig) -> Result<InferenceEngine> {
    Ok(InferenceEngine::new(rule_base, config.clone())?)
}

/// Open the catalog at `path`, or the bundled sample catalog.
pub fn open_catalog(path: Option<&Path>) -> Result<JsonCatalog> {
    match path {
        Some(path) => JsonCatalog::open(path),
        None => {
            tracing::info!("No catalog configured, using the sample catalog");
            JsonCatalog::sample()
        }
    }
}
