//! Rule base validation errors

use thiserror::Error;

/// Errors raised while building a [`RuleBase`](crate::RuleBase)
///
/// These are load-time errors. A rule base that builds successfully never
/// produces them during evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleBaseError {
    /// Two variables share a name
    #[error("Duplicate variable '{0}'")]
    DuplicateVariable(String),

    /// Two terms of one variable share a name
    #[error("Duplicate term '{term}' in variable '{variable}'")]
    DuplicateTerm {
        /// Variable holding the terms
        variable: String,
        /// Repeated term name
        term: String,
    },

    /// A rule references a variable the rule base does not define
    #[error("Rule {rule} references unknown variable '{variable}'")]
    UnknownVariable {
        /// Index of the offending rule
        rule: usize,
        /// Variable name as written in the rule
        variable: String,
    },

    /// A rule references a term its variable does not define
    #[error("Rule {rule} references unknown term '{term}' of variable '{variable}'")]
    UnknownTerm {
        /// Index of the offending rule
        rule: usize,
        /// Variable name
        variable: String,
        /// Term name as written in the rule
        term: String,
    },

    /// A membership function has invalid parameters
    #[error("Invalid membership function for '{variable}.{term}': {reason}")]
    InvalidMembership {
        /// Variable name
        variable: String,
        /// Term name
        term: String,
        /// What is wrong with the parameters
        reason: String,
    },

    /// A variable's numeric domain is empty or not finite
    #[error("Invalid domain [{min}, {max}] for variable '{variable}'")]
    InvalidDomain {
        /// Variable name
        variable: String,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// A rule weight lies outside [0, 1]
    #[error("Rule {rule} has weight {weight} outside [0.0, 1.0]")]
    InvalidWeight {
        /// Index of the offending rule
        rule: usize,
        /// The weight given
        weight: f64,
    },

    /// A rule has no antecedent clauses
    #[error("Rule {0} has no antecedent clauses")]
    EmptyAntecedent(usize),

    /// A rule concludes on something other than the output variable
    #[error("Rule {rule} concludes on '{variable}', which is not the output variable")]
    ConsequentNotOutput {
        /// Index of the offending rule
        rule: usize,
        /// Variable named in the consequent
        variable: String,
    },

    /// A rule tests the output variable in its antecedent
    #[error("Rule {rule} tests the output variable '{variable}' in its antecedent")]
    AntecedentOnOutput {
        /// Index of the offending rule
        rule: usize,
        /// Output variable name
        variable: String,
    },

    /// The output variable has a zero-width singleton term
    #[error("Output term '{0}' is a singleton; output terms need a non-zero support")]
    SingletonOutputTerm(String),

    /// A variable declares no terms
    #[error("Variable '{0}' has no terms")]
    NoTerms(String),

    /// No input variables were declared
    #[error("Rule base '{0}' has no input variables")]
    NoInputs(String),

    /// No output variable was declared
    #[error("Rule base '{0}' has no output variable")]
    NoOutput(String),

    /// More than one output variable was declared
    #[error("Rule base '{0}' declares more than one output variable")]
    MultipleOutputs(String),

    /// No rules were declared
    #[error("Rule base '{0}' has no rules")]
    NoRules(String),
}
