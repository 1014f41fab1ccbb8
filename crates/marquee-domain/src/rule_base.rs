//! Rule base (function block)
//!
//! A rule base owns the input variables, the single output variable and the
//! ordered rules. It is built once, validated as a whole, and read-only
//! afterwards, so one instance can be shared by any number of concurrent
//! evaluations.

use crate::error::RuleBaseError;
use crate::membership::MembershipFunction;
use crate::rule::{Clause, Rule};
use crate::variable::LinguisticVariable;
use std::collections::HashSet;

/// A validated, immutable set of variables and rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    name: String,
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
    /// Indices into `inputs` of the variables some rule reads
    required: Vec<usize>,
}

impl RuleBase {
    /// Start building a rule base
    pub fn builder(name: impl Into<String>) -> RuleBaseBuilder {
        RuleBaseBuilder::new(name)
    }

    /// Function block name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input variables in declaration order
    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// Look up an input variable by name
    pub fn input(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.iter().find(|var| var.name() == name)
    }

    /// The single output variable
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Names of the inputs an evaluation context must supply
    ///
    /// Only inputs referenced by at least one rule are required.
    pub fn required_inputs(&self) -> impl Iterator<Item = &str> {
        self.required_variables().map(|var| var.name())
    }

    /// Input variables referenced by at least one rule, in declaration order
    pub fn required_variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.required.iter().map(move |&idx| &self.inputs[idx])
    }
}

/// Collects variables and rules, then validates them into a [`RuleBase`]
#[derive(Debug, Clone)]
pub struct RuleBaseBuilder {
    name: String,
    inputs: Vec<LinguisticVariable>,
    outputs: Vec<LinguisticVariable>,
    rules: Vec<Rule>,
}

impl RuleBaseBuilder {
    /// Create an empty builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add an input variable
    pub fn input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    /// Set the output variable
    ///
    /// Declaring more than one output is reported by [`build`](Self::build).
    pub fn output(mut self, variable: LinguisticVariable) -> Self {
        self.outputs.push(variable);
        self
    }

    /// Append a rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validate everything and produce the rule base
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleBaseError`] found: malformed variables or
    /// membership functions, duplicate names, rules that reference unknown
    /// variables or terms, bad weights, or a missing input/output/rule set.
    pub fn build(self) -> Result<RuleBase, RuleBaseError> {
        let RuleBaseBuilder {
            name,
            inputs,
            mut outputs,
            rules,
        } = self;

        if inputs.is_empty() {
            return Err(RuleBaseError::NoInputs(name));
        }
        if outputs.len() > 1 {
            return Err(RuleBaseError::MultipleOutputs(name));
        }
        let output = outputs.pop().ok_or_else(|| RuleBaseError::NoOutput(name.clone()))?;
        if rules.is_empty() {
            return Err(RuleBaseError::NoRules(name));
        }

        let mut seen = HashSet::new();
        for var in inputs.iter().chain(std::iter::once(&output)) {
            if !seen.insert(var.name()) {
                return Err(RuleBaseError::DuplicateVariable(var.name().to_string()));
            }
            validate_variable(var)?;
        }

        for (term, mf) in output.terms() {
            if matches!(mf, MembershipFunction::Singleton(_)) {
                return Err(RuleBaseError::SingletonOutputTerm(term.to_string()));
            }
        }

        for (idx, rule) in rules.iter().enumerate() {
            validate_rule(idx, rule, &inputs, &output)?;
        }

        let required = inputs
            .iter()
            .enumerate()
            .filter(|(_, var)| {
                rules
                    .iter()
                    .any(|rule| rule.antecedent().iter().any(|c| c.variable == var.name()))
            })
            .map(|(idx, _)| idx)
            .collect();

        Ok(RuleBase {
            name,
            inputs,
            output,
            rules,
            required,
        })
    }
}

fn validate_variable(var: &LinguisticVariable) -> Result<(), RuleBaseError> {
    let (min, max) = var.domain();
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(RuleBaseError::InvalidDomain {
            variable: var.name().to_string(),
            min,
            max,
        });
    }

    let mut terms = HashSet::new();
    for (term, mf) in var.terms() {
        if !terms.insert(term) {
            return Err(RuleBaseError::DuplicateTerm {
                variable: var.name().to_string(),
                term: term.to_string(),
            });
        }
        mf.validate().map_err(|reason| RuleBaseError::InvalidMembership {
            variable: var.name().to_string(),
            term: term.to_string(),
            reason,
        })?;
    }

    if terms.is_empty() {
        return Err(RuleBaseError::NoTerms(var.name().to_string()));
    }

    Ok(())
}

fn validate_rule(
    idx: usize,
    rule: &Rule,
    inputs: &[LinguisticVariable],
    output: &LinguisticVariable,
) -> Result<(), RuleBaseError> {
    if rule.antecedent().is_empty() {
        return Err(RuleBaseError::EmptyAntecedent(idx));
    }

    let weight = rule.weight();
    if !(0.0..=1.0).contains(&weight) {
        return Err(RuleBaseError::InvalidWeight { rule: idx, weight });
    }

    for clause in rule.antecedent() {
        if clause.variable == output.name() {
            return Err(RuleBaseError::AntecedentOnOutput {
                rule: idx,
                variable: clause.variable.clone(),
            });
        }
        let var = inputs
            .iter()
            .find(|var| var.name() == clause.variable)
            .ok_or_else(|| RuleBaseError::UnknownVariable {
                rule: idx,
                variable: clause.variable.clone(),
            })?;
        check_term(idx, var, clause)?;
    }

    let consequent = rule.consequent();
    if consequent.variable != output.name() {
        return Err(if inputs.iter().any(|var| var.name() == consequent.variable) {
            RuleBaseError::ConsequentNotOutput {
                rule: idx,
                variable: consequent.variable.clone(),
            }
        } else {
            RuleBaseError::UnknownVariable {
                rule: idx,
                variable: consequent.variable.clone(),
            }
        });
    }
    check_term(idx, output, consequent)
}

fn check_term(idx: usize, var: &LinguisticVariable, clause: &Clause) -> Result<(), RuleBaseError> {
    if var.has_term(&clause.term) {
        Ok(())
    } else {
        Err(RuleBaseError::UnknownTerm {
            rule: idx,
            variable: clause.variable.clone(),
            term: clause.term.clone(),
        })
    }
}
