//! Mamdani inference over a rule base

use crate::context::{EvaluationContext, EvaluationResult, RuleFiring};
use crate::{EngineConfig, EngineError};
use marquee_domain::{InputDegrees, MembershipFunction, RuleBase};
use std::sync::Arc;
use tracing::{debug, trace};

/// Evaluates crisp inputs against a rule base
///
/// The engine holds the rule base behind an `Arc` and never mutates it, so
/// clones are cheap and evaluations may run concurrently from any thread.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    rule_base: Arc<RuleBase>,
    config: EngineConfig,
}

impl InferenceEngine {
    /// Create an engine for a rule base
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration is invalid.
    pub fn new(rule_base: RuleBase, config: EngineConfig) -> Result<Self, EngineError> {
        Self::shared(Arc::new(rule_base), config)
    }

    /// Create an engine over an already shared rule base
    pub fn shared(rule_base: Arc<RuleBase>, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self { rule_base, config })
    }

    /// Create an engine with default configuration
    pub fn with_defaults(rule_base: RuleBase) -> Self {
        Self {
            rule_base: Arc::new(rule_base),
            config: EngineConfig::default(),
        }
    }

    /// The rule base being evaluated
    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run fuzzification, rule evaluation, aggregation and centroid
    /// defuzzification for one context
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingInput`] if a required input is absent
    /// - [`EngineError::InvalidInput`] if a required input is not finite
    /// - [`EngineError::NoRuleFired`] if the aggregated output is zero everywhere
    pub fn evaluate(&self, context: &EvaluationContext) -> Result<EvaluationResult, EngineError> {
        let degrees = self.fuzzify(context)?;

        let strengths: Vec<f64> = self
            .rule_base
            .rules()
            .iter()
            .map(|rule| rule.fire(&degrees))
            .collect();

        for (idx, strength) in strengths.iter().enumerate() {
            trace!(rule = idx, strength, "Rule fired");
        }

        let activations = self.aggregate(&strengths);
        let value = self.centroid(&activations)?;

        debug!(
            rule_base = self.rule_base.name(),
            value,
            fired = strengths.iter().filter(|s| **s > 0.0).count(),
            "Evaluation complete"
        );

        let firing_strengths: Option<Vec<RuleFiring>> = self.config.retain_firing_strengths.then(|| {
            self.rule_base
                .rules()
                .iter()
                .zip(&strengths)
                .enumerate()
                .map(|(idx, (rule, strength))| RuleFiring {
                    rule: idx,
                    term: rule.consequent().term.clone(),
                    strength: *strength,
                })
                .collect()
        });

        Ok(EvaluationResult {
            value,
            activations: activations
                .into_iter()
                .map(|(term, _, activation)| (term.to_string(), activation))
                .collect(),
            firing_strengths,
        })
    }

    /// Evaluate and return only the crisp output
    pub fn evaluate_score(&self, context: &EvaluationContext) -> Result<f64, EngineError> {
        self.evaluate(context).map(|result| result.value)
    }

    /// Evaluate each context independently
    ///
    /// A failure in one element does not affect the others.
    pub fn evaluate_batch(&self, contexts: &[EvaluationContext]) -> Vec<Result<f64, EngineError>> {
        contexts.iter().map(|ctx| self.evaluate_score(ctx)).collect()
    }

    /// Step 1: fuzzify every input the rules reference
    ///
    /// All inputs are checked before any degree is computed.
    fn fuzzify(&self, context: &EvaluationContext) -> Result<InputDegrees, EngineError> {
        let mut values = Vec::new();
        for var in self.rule_base.required_variables() {
            let value = context.get(var.name()).ok_or_else(|| EngineError::MissingInput {
                variable: var.name().to_string(),
            })?;
            if !value.is_finite() {
                return Err(EngineError::InvalidInput {
                    variable: var.name().to_string(),
                    value,
                });
            }
            values.push((var, value));
        }

        Ok(values
            .into_iter()
            .map(|(var, value)| (var.name().to_string(), var.fuzzify(value)))
            .collect())
    }

    /// Step 3: max-aggregate firing strengths per output term
    fn aggregate(&self, strengths: &[f64]) -> Vec<(&str, &MembershipFunction, f64)> {
        self.rule_base
            .output()
            .terms()
            .map(|(term, mf)| {
                let activation = self
                    .rule_base
                    .rules()
                    .iter()
                    .zip(strengths)
                    .filter(|(rule, _)| rule.consequent().term == term)
                    .map(|(_, strength)| *strength)
                    .fold(0.0, f64::max);
                (term, mf, activation)
            })
            .collect()
    }

    /// Steps 4 and 5: clip each term at its activation, take the union, and
    /// return the sampled centroid
    fn centroid(&self, activations: &[(&str, &MembershipFunction, f64)]) -> Result<f64, EngineError> {
        let active: Vec<(&MembershipFunction, f64)> = activations
            .iter()
            .filter(|(_, _, activation)| *activation > 0.0)
            .map(|(_, mf, activation)| (*mf, *activation))
            .collect();
        if active.is_empty() {
            return Err(EngineError::NoRuleFired);
        }

        let (min, max) = self.rule_base.output().domain();
        let steps = (self.config.resolution - 1) as f64;
        let mut weighted = 0.0;
        let mut total = 0.0;

        for i in 0..self.config.resolution {
            let x = min + (max - min) * (i as f64 / steps);
            let mu = active
                .iter()
                .map(|(mf, activation)| mf.evaluate(x).min(*activation))
                .fold(0.0, f64::max);
            weighted += x * mu;
            total += mu;
        }

        if total > 0.0 {
            Ok(weighted / total)
        } else {
            Err(EngineError::NoRuleFired)
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use marquee_domain::{Clause, Connective, LinguisticVariable, Rule};
    use proptest::prelude::*;

    fn two_input() -> InferenceEngine {
        let term_set = |name: &str| {
            LinguisticVariable::new(name, 0.0, 10.0)
                .with_term("low", MembershipFunction::Trapezoidal(0.0, 0.0, 3.0, 7.0))
                .with_term("high", MembershipFunction::Trapezoidal(3.0, 7.0, 10.0, 10.0))
        };
        let output = LinguisticVariable::new("out", 0.0, 10.0)
            .with_term("low", MembershipFunction::Gaussian(2.0, 1.5))
            .with_term("high", MembershipFunction::Gaussian(8.0, 1.5));

        let rb = RuleBase::builder("props")
            .input(term_set("a"))
            .input(term_set("b"))
            .output(output)
            .rule(Rule::new(
                vec![Clause::new("a", "low"), Clause::new("b", "low")],
                Connective::Or,
                Clause::new("out", "low"),
            ))
            .rule(
                Rule::new(
                    vec![Clause::new("a", "high"), Clause::new("b", "high")],
                    Connective::And,
                    Clause::new("out", "high"),
                )
                .with_weight(0.8),
            )
            .build()
            .unwrap();
        InferenceEngine::new(rb, EngineConfig::fast()).unwrap()
    }

    proptest! {
        /// Property: Evaluating twice yields bit-identical output
        #[test]
        fn test_idempotent(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
            let engine = two_input();
            let ctx = EvaluationContext::new().with("a", a).with("b", b);
            let first = engine.evaluate(&ctx).unwrap();
            let second = engine.evaluate(&ctx).unwrap();
            prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
            prop_assert_eq!(first, second);
        }

        /// Property: The crisp output stays inside the output domain
        #[test]
        fn test_output_in_domain(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
            let value = two_input()
                .evaluate_score(&EvaluationContext::new().with("a", a).with("b", b))
                .unwrap();
            prop_assert!((0.0..=10.0).contains(&value));
        }
    }
}
