//! Marquee Rules
//!
//! Declarative rule bases for the Marquee inference engine.
//!
//! # Overview
//!
//! Rule bases are described in TOML as one or more function blocks. Each
//! block declares its input variables, a single output variable, and the
//! rules connecting them. Loading a block builds a validated
//! [`RuleBase`](marquee_domain::RuleBase); any dangling reference or
//! malformed membership function is rejected before an engine sees it.
//!
//! ```toml
//! [[function_block]]
//! name = "tip"
//!
//! [[function_block.input]]
//! name = "service"
//! range = [0.0, 10.0]
//! terms = [
//!     { name = "poor", shape = "trapezoidal", points = [0.0, 0.0, 2.0, 6.0] },
//!     { name = "great", shape = "trapezoidal", points = [4.0, 8.0, 10.0, 10.0] },
//! ]
//!
//! [function_block.output]
//! name = "tip"
//! range = [0.0, 30.0]
//! terms = [
//!     { name = "low", shape = "triangular", points = [0.0, 5.0, 10.0] },
//!     { name = "high", shape = "triangular", points = [15.0, 25.0, 30.0] },
//! ]
//!
//! [[function_block.rule]]
//! if = [["service", "great"]]
//! then = ["tip", "high"]
//! weight = 0.9
//! ```
//!
//! # Example Usage
//!
//! ```
//! let rule_base = marquee_rules::film_quality()?;
//! assert_eq!(rule_base.name(), marquee_rules::FILM_QUALITY_BLOCK);
//! assert_eq!(rule_base.inputs().len(), 5);
//! # Ok::<(), marquee_rules::RulesError>(())
//! ```

#![warn(missing_docs)]

mod bundled;
mod definition;
mod error;
mod loader;


pub use bundled::{film_quality, FILM_QUALITY_BLOCK, FILM_QUALITY_RULES};
pub use definition::{
    ConnectiveDef, FunctionBlockDef, RuleDef, RuleDocument, TermDef, VariableDef,
};
pub use error::RulesError;
pub use loader::{load_file, load_str, parse_document, to_toml};
