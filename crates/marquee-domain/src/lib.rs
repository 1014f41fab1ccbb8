//! Marquee Domain Layer
//!
//! This crate contains the fuzzy model and the film records that the rest of
//! Marquee is built on. It performs no I/O and holds no shared state: every
//! type here is either an immutable definition or a plain value.
//!
//! ## Key Concepts
//!
//! - **Membership Function**: degree (0..=1) to which a crisp value belongs to a term
//! - **Linguistic Variable**: a named input or output with an ordered set of terms
//! - **Rule**: antecedent clauses joined by one connective, a consequent, a weight
//! - **Rule Base**: the validated set of variables and rules, loaded once
//! - **Quality Category**: the band a crisp score maps to
//! - **Film / Person**: records that carry the crisp quality scores
//!
//! ## Architecture
//!
//! - Invariants of the rule base are enforced when it is built, never during
//!   evaluation
//! - Evaluation lives in `marquee-engine`, parsing in `marquee-rules`
//! - Trait definitions for data access live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod error;
pub mod film;
pub mod membership;
pub mod person;
pub mod rule;
pub mod rule_base;
pub mod traits;
pub mod variable;

// Re-exports for convenience
pub use category::{categorize, QualityCategory};
pub use error::RuleBaseError;
pub use film::{Film, QualityScores};
pub use membership::MembershipFunction;
pub use person::{Person, Role};
pub use rule::{Clause, Connective, InputDegrees, Rule};
pub use rule_base::{RuleBase, RuleBaseBuilder};
pub use variable::{LinguisticVariable, TermDegrees};
