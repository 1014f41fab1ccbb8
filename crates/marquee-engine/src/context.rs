//! Per-call evaluation input and output

use marquee_domain::{categorize, QualityCategory, QualityScores};
use serde::Serialize;
use std::collections::HashMap;

/// Crisp input values keyed by input variable name
///
/// Supplied fresh for each evaluation and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    values: HashMap<String, f64>,
}

impl EvaluationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value (builder style)
    pub fn with(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    /// Set or replace a value
    pub fn set(&mut self, variable: impl Into<String>, value: f64) {
        self.values.insert(variable.into(), value);
    }

    /// Remove a value, returning it if present
    pub fn remove(&mut self, variable: &str) -> Option<f64> {
        self.values.remove(variable)
    }

    /// Value for a variable
    pub fn get(&self, variable: &str) -> Option<f64> {
        self.values.get(variable).copied()
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&QualityScores> for EvaluationContext {
    fn from(scores: &QualityScores) -> Self {
        scores.inputs().into_iter().collect()
    }
}

impl From<QualityScores> for EvaluationContext {
    fn from(scores: QualityScores) -> Self {
        Self::from(&scores)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EvaluationContext {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Firing strength of one rule in one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleFiring {
    /// Index of the rule in the rule base
    pub rule: usize,

    /// Output term the rule concludes on
    pub term: String,

    /// Weighted firing strength in [0, 1]
    pub strength: f64,
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Defuzzified crisp output
    pub value: f64,

    /// Aggregated activation of each output term, in declaration order
    pub activations: Vec<(String, f64)>,

    /// Per-rule firing strengths, when retained by configuration
    pub firing_strengths: Option<Vec<RuleFiring>>,
}

impl EvaluationResult {
    /// Band of the crisp output
    pub fn category(&self) -> QualityCategory {
        categorize(self.value)
    }

    /// Rules with a non-zero firing strength, strongest first
    ///
    /// Empty when firing strengths were not retained.
    pub fn fired_rules(&self) -> Vec<&RuleFiring> {
        let mut fired: Vec<&RuleFiring> = self
            .firing_strengths
            .iter()
            .flatten()
            .filter(|f| f.strength > 0.0)
            .collect();
        fired.sort_by(|a, b| b.strength.total_cmp(&a.strength).then(a.rule.cmp(&b.rule)));
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_building() {
        let mut ctx = EvaluationContext::new().with("acting", 7.5).with("direction", 8.0);
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("acting"), Some(7.5));

        ctx.set("acting", 6.0);
        assert_eq!(ctx.get("acting"), Some(6.0));
        assert_eq!(ctx.remove("direction"), Some(8.0));
        assert_eq!(ctx.get("direction"), None);
    }

    #[test]
    fn test_context_from_scores() {
        let ctx = EvaluationContext::from(QualityScores::new(1.0, 2.0, 3.0, 4.0, 5.0));
        assert_eq!(ctx.len(), 5);
        assert_eq!(ctx.get("screenplay"), Some(3.0));
        assert_eq!(ctx.get("visualEffects"), Some(4.0));
        assert_eq!(ctx.get("culturalSignificance"), Some(5.0));
    }

    #[test]
    fn test_fired_rules_order() {
        let result = EvaluationResult {
            value: 6.0,
            activations: vec![],
            firing_strengths: Some(vec![
                RuleFiring { rule: 0, term: "good".into(), strength: 0.2 },
                RuleFiring { rule: 1, term: "bad".into(), strength: 0.0 },
                RuleFiring { rule: 2, term: "excellent".into(), strength: 0.7 },
            ]),
        };
        let fired: Vec<usize> = result.fired_rules().iter().map(|f| f.rule).collect();
        assert_eq!(fired, vec![2, 0]);
        assert_eq!(result.category(), QualityCategory::Good);
    }
}
