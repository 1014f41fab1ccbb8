//! The film-quality rule base shipped with the crate

use crate::error::RulesError;
use crate::loader::load_str;
use marquee_domain::RuleBase;

/// Name of the bundled function block
pub const FILM_QUALITY_BLOCK: &str = "film_quality_assessment";

/// TOML source of the bundled rule base
pub const FILM_QUALITY_RULES: &str = include_str!("../resources/film_quality.toml");

/// Load the bundled film-quality rule base
///
/// Five inputs on [0, 10] (`direction`, `acting`, `screenplay`,
/// `visualEffects`, `culturalSignificance`), each with `poor`, `average`
/// and `good` terms, and a `quality` output with `bad`, `mediocre`, `good`
/// and `excellent` terms.
pub fn film_quality() -> Result<RuleBase, RulesError> {
    load_str(FILM_QUALITY_RULES, Some(FILM_QUALITY_BLOCK))
}
