//! Error types for rule-base loading

use marquee_domain::RuleBaseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a rule base
#[derive(Error, Debug)]
pub enum RulesError {
    /// The description is not valid TOML or does not match the format
    #[error("Rule description parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The description could not be serialized
    #[error("Rule description serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The description file could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The description parsed but violates a rule-base invariant
    #[error("Invalid rule base: {0}")]
    Validation(#[from] RuleBaseError),

    /// No function block with the requested name
    #[error("Function block '{0}' not found")]
    FunctionBlockNotFound(String),
}
