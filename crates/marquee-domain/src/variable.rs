//! Linguistic variables

use crate::membership::MembershipFunction;
use std::collections::HashMap;

/// Degrees of membership keyed by term name
pub type TermDegrees = HashMap<String, f64>;

/// A named input or output with an ordered set of linguistic terms
///
/// The declared domain is informational: values outside it are still
/// fuzzified rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    min: f64,
    max: f64,
    terms: Vec<(String, MembershipFunction)>,
}

impl LinguisticVariable {
    /// Create a variable with no terms over the domain [min, max]
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            terms: Vec::new(),
        }
    }

    /// Append a term (builder style)
    ///
    /// Term names are checked for uniqueness when the rule base is built.
    pub fn with_term(mut self, name: impl Into<String>, membership: MembershipFunction) -> Self {
        self.terms.push((name.into(), membership));
        self
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared domain as (min, max)
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Terms in declaration order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &MembershipFunction)> {
        self.terms.iter().map(|(name, mf)| (name.as_str(), mf))
    }

    /// Look up a term's membership function
    pub fn term(&self, name: &str) -> Option<&MembershipFunction> {
        self.terms
            .iter()
            .find(|(term, _)| term == name)
            .map(|(_, mf)| mf)
    }

    /// Whether the variable defines the given term
    pub fn has_term(&self, name: &str) -> bool {
        self.term(name).is_some()
    }

    /// Whether `x` lies inside the declared domain
    pub fn in_domain(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Degree of membership of `x` in every term
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_domain::{LinguisticVariable, MembershipFunction};
    ///
    /// let acting = LinguisticVariable::new("acting", 0.0, 10.0)
    ///     .with_term("poor", MembershipFunction::Trapezoidal(0.0, 0.0, 2.0, 4.5))
    ///     .with_term("good", MembershipFunction::Trapezoidal(5.5, 8.0, 10.0, 10.0));
    ///
    /// let degrees = acting.fuzzify(9.0);
    /// assert_eq!(degrees["good"], 1.0);
    /// assert_eq!(degrees["poor"], 0.0);
    /// ```
    pub fn fuzzify(&self, x: f64) -> TermDegrees {
        self.terms
            .iter()
            .map(|(name, mf)| (name.clone(), mf.evaluate(x)))
            .collect()
    }

    /// Term with the highest membership at `x`, first declared wins ties
    pub fn dominant_term(&self, x: f64) -> Option<(&str, f64)> {
        self.terms
            .iter()
            .map(|(name, mf)| (name.as_str(), mf.evaluate(x)))
            .fold(None, |best, (name, degree)| match best {
                Some((_, best_degree)) if best_degree >= degree => best,
                _ => Some((name, degree)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score() -> LinguisticVariable {
        LinguisticVariable::new("direction", 0.0, 10.0)
            .with_term("poor", MembershipFunction::Trapezoidal(0.0, 0.0, 2.0, 4.5))
            .with_term("average", MembershipFunction::Triangular(2.5, 5.0, 7.5))
            .with_term("good", MembershipFunction::Trapezoidal(5.5, 8.0, 10.0, 10.0))
    }

    #[test]
    fn test_fuzzify_covers_every_term() {
        let degrees = score().fuzzify(6.0);
        assert_eq!(degrees.len(), 3);
        assert_eq!(degrees["poor"], 0.0);
        assert!((degrees["average"] - 0.6).abs() < 1e-12);
        assert!((degrees["good"] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_domain_is_still_fuzzified() {
        let var = score();
        assert!(!var.in_domain(12.0));
        let degrees = var.fuzzify(12.0);
        assert_eq!(degrees["good"], 0.0);
        assert_eq!(degrees["average"], 0.0);

        let degrees = var.fuzzify(-1.0);
        assert_eq!(degrees["poor"], 0.0);
    }

    #[test]
    fn test_term_order_is_preserved() {
        let var = score();
        let names: Vec<&str> = var.terms().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["poor", "average", "good"]);
    }

    #[test]
    fn test_term_lookup() {
        let var = score();
        assert!(var.has_term("average"));
        assert!(!var.has_term("excellent"));
        assert_eq!(
            var.term("average"),
            Some(&MembershipFunction::Triangular(2.5, 5.0, 7.5))
        );
    }

    #[test]
    fn test_dominant_term() {
        let var = score();
        assert_eq!(var.dominant_term(1.0), Some(("poor", 1.0)));
        assert_eq!(var.dominant_term(5.0), Some(("average", 1.0)));
        assert_eq!(var.dominant_term(9.0), Some(("good", 1.0)));
        assert_eq!(LinguisticVariable::new("empty", 0.0, 1.0).dominant_term(0.5), None);
    }
}
