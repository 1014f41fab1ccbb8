//! Marquee Engine
//!
//! Mamdani-style fuzzy inference over a [`RuleBase`](marquee_domain::RuleBase).
//!
//! The engine provides:
//! - Fuzzification of crisp inputs through each variable's terms
//! - Rule firing (min for AND, max for OR, scaled by rule weight)
//! - Max-aggregation of firing strengths per output term
//! - Clip implication and sampled centroid defuzzification
//! - Batch and film-level evaluation, with optional per-rule explanations
//!
//! Evaluation is stateless: the rule base is read-only and every call gets
//! its own context and result.
//!
//! # Examples
//!
//! ```
//! use marquee_domain::{Clause, Connective, LinguisticVariable, MembershipFunction, Rule, RuleBase};
//! use marquee_engine::{EvaluationContext, InferenceEngine};
//!
//! let rule_base = RuleBase::builder("tip")
//!     .input(
//!         LinguisticVariable::new("service", 0.0, 10.0)
//!             .with_term("poor", MembershipFunction::Trapezoidal(0.0, 0.0, 2.0, 6.0))
//!             .with_term("great", MembershipFunction::Trapezoidal(4.0, 8.0, 10.0, 10.0)),
//!     )
//!     .output(
//!         LinguisticVariable::new("tip", 0.0, 30.0)
//!             .with_term("low", MembershipFunction::Triangular(0.0, 5.0, 10.0))
//!             .with_term("high", MembershipFunction::Triangular(15.0, 25.0, 30.0)),
//!     )
//!     .rule(Rule::new(vec![Clause::new("service", "poor")], Connective::And, Clause::new("tip", "low")))
//!     .rule(Rule::new(vec![Clause::new("service", "great")], Connective::And, Clause::new("tip", "high")))
//!     .build()?;
//!
//! let engine = InferenceEngine::with_defaults(rule_base);
//! let tip = engine.evaluate_score(&EvaluationContext::new().with("service", 9.0))?;
//! assert!(tip > 15.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod error;
mod report;

pub use config::{EngineConfig, DEFAULT_RESOLUTION, MIN_RESOLUTION};
pub use context::{EvaluationContext, EvaluationResult, RuleFiring};
pub use engine::InferenceEngine;
pub use error::EngineError;
pub use marquee_domain::{categorize, QualityCategory};
pub use report::FilmEvaluation;
