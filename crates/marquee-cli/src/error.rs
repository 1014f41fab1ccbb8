//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inference error
    #[error("Evaluation failed: {0}")]
    Engine(#[from] marquee_engine::EngineError),

    /// Rule base could not be loaded
    #[error(transparent)]
    Rules(#[from] marquee_rules::RulesError),

    /// Film catalog error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No film with the given id
    #[error("Film '{0}' not found")]
    FilmNotFound(String),
}
