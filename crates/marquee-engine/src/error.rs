//! Engine error types

use thiserror::Error;

/// Errors that can occur during an evaluation
///
/// None of these leave state behind: the engine is stateless between calls,
/// so a caller can recover by fixing the context and evaluating again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The context lacks a value for a required input variable
    #[error("Missing input: no value for variable '{variable}'")]
    MissingInput {
        /// Name of the absent input variable
        variable: String,
    },

    /// The context holds a non-finite value for an input variable
    #[error("Invalid input: variable '{variable}' has non-finite value {value}")]
    InvalidInput {
        /// Name of the input variable
        variable: String,
        /// The rejected value
        value: f64,
    },

    /// The aggregated output membership is zero everywhere
    #[error("No rule fired: aggregated output membership is zero over the whole domain")]
    NoRuleFired,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
