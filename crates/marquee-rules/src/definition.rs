//! Serde model of the TOML rule-base description

use marquee_domain::{
    Clause, Connective, LinguisticVariable, MembershipFunction, Rule, RuleBase, RuleBaseError,
};
use serde::{Deserialize, Serialize};

/// A rule-base description file: one or more function blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Function blocks in file order
    #[serde(default, rename = "function_block")]
    pub function_blocks: Vec<FunctionBlockDef>,
}

/// One function block: inputs, a single output, and rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionBlockDef {
    /// Block name
    pub name: String,

    /// Input variables
    #[serde(default, rename = "input")]
    pub inputs: Vec<VariableDef>,

    /// Output variable
    pub output: VariableDef,

    /// Rules in evaluation order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDef>,
}

/// A linguistic variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    /// Variable name
    pub name: String,

    /// Numeric domain as [min, max]
    pub range: [f64; 2],

    /// Terms in declaration order
    #[serde(default)]
    pub terms: Vec<TermDef>,
}

/// A linguistic term, tagged by membership shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum TermDef {
    /// `points = [a, b, c]`
    Triangular {
        /// Term name
        name: String,
        /// Feet and peak
        points: [f64; 3],
    },

    /// `points = [a, b, c, d]`
    Trapezoidal {
        /// Term name
        name: String,
        /// Feet and plateau edges
        points: [f64; 4],
    },

    /// `mean = m, stdev = s`
    Gaussian {
        /// Term name
        name: String,
        /// Centre of the bell
        mean: f64,
        /// Standard deviation
        stdev: f64,
    },

    /// `point = p`
    Singleton {
        /// Term name
        name: String,
        /// Location of the spike
        point: f64,
    },
}

/// How rule clauses combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectiveDef {
    /// Minimum
    #[default]
    And,
    /// Maximum
    Or,
}

/// A rule: `if = [[var, term], ...]`, `then = [var, term]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Antecedent clauses as (variable, term) pairs
    #[serde(rename = "if")]
    pub antecedent: Vec<(String, String)>,

    /// Clause combinator, AND when omitted
    #[serde(default)]
    pub connective: ConnectiveDef,

    /// Consequent as (variable, term)
    #[serde(rename = "then")]
    pub consequent: (String, String),

    /// Weight in [0, 1], 1.0 when omitted
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl TermDef {
    /// Term name
    pub fn name(&self) -> &str {
        match self {
            TermDef::Triangular { name, .. }
            | TermDef::Trapezoidal { name, .. }
            | TermDef::Gaussian { name, .. }
            | TermDef::Singleton { name, .. } => name,
        }
    }

    /// Membership function described by this term
    pub fn membership(&self) -> MembershipFunction {
        match *self {
            TermDef::Triangular { points: [a, b, c], .. } => MembershipFunction::Triangular(a, b, c),
            TermDef::Trapezoidal { points: [a, b, c, d], .. } => {
                MembershipFunction::Trapezoidal(a, b, c, d)
            }
            TermDef::Gaussian { mean, stdev, .. } => MembershipFunction::Gaussian(mean, stdev),
            TermDef::Singleton { point, .. } => MembershipFunction::Singleton(point),
        }
    }

    fn from_membership(name: &str, mf: &MembershipFunction) -> Self {
        let name = name.to_string();
        match *mf {
            MembershipFunction::Triangular(a, b, c) => TermDef::Triangular { name, points: [a, b, c] },
            MembershipFunction::Trapezoidal(a, b, c, d) => TermDef::Trapezoidal {
                name,
                points: [a, b, c, d],
            },
            MembershipFunction::Gaussian(mean, stdev) => TermDef::Gaussian { name, mean, stdev },
            MembershipFunction::Singleton(point) => TermDef::Singleton { name, point },
        }
    }
}

impl VariableDef {
    fn to_variable(&self) -> LinguisticVariable {
        self.terms.iter().fold(
            LinguisticVariable::new(&self.name, self.range[0], self.range[1]),
            |var, term| var.with_term(term.name(), term.membership()),
        )
    }

    fn from_variable(var: &LinguisticVariable) -> Self {
        let (min, max) = var.domain();
        Self {
            name: var.name().to_string(),
            range: [min, max],
            terms: var
                .terms()
                .map(|(name, mf)| TermDef::from_membership(name, mf))
                .collect(),
        }
    }
}

impl RuleDef {
    fn to_rule(&self) -> Rule {
        let connective = match self.connective {
            ConnectiveDef::And => Connective::And,
            ConnectiveDef::Or => Connective::Or,
        };
        let antecedent = self
            .antecedent
            .iter()
            .map(|(var, term)| Clause::new(var, term))
            .collect();
        let (var, term) = &self.consequent;
        Rule::new(antecedent, connective, Clause::new(var, term)).with_weight(self.weight)
    }

    fn from_rule(rule: &Rule) -> Self {
        Self {
            antecedent: rule
                .antecedent()
                .iter()
                .map(|c| (c.variable.clone(), c.term.clone()))
                .collect(),
            connective: match rule.connective() {
                Connective::And => ConnectiveDef::And,
                Connective::Or => ConnectiveDef::Or,
            },
            consequent: (rule.consequent().variable.clone(), rule.consequent().term.clone()),
            weight: rule.weight(),
        }
    }
}

impl FunctionBlockDef {
    /// Build and validate the rule base this block describes
    pub fn build(&self) -> Result<RuleBase, RuleBaseError> {
        let builder = self
            .inputs
            .iter()
            .fold(RuleBase::builder(&self.name), |b, var| b.input(var.to_variable()))
            .output(self.output.to_variable());

        self.rules
            .iter()
            .fold(builder, |b, rule| b.rule(rule.to_rule()))
            .build()
    }

    /// Describe an existing rule base
    pub fn from_rule_base(rule_base: &RuleBase) -> Self {
        Self {
            name: rule_base.name().to_string(),
            inputs: rule_base.inputs().iter().map(VariableDef::from_variable).collect(),
            output: VariableDef::from_variable(rule_base.output()),
            rules: rule_base.rules().iter().map(RuleDef::from_rule).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_shapes() {
        let doc: RuleDocument = toml::from_str(
            r#"
            [[function_block]]
            name = "shapes"

            [function_block.output]
            name = "out"
            range = [0.0, 1.0]
            terms = [
                { name = "tri", shape = "triangular", points = [0.0, 0.5, 1.0] },
                { name = "trap", shape = "trapezoidal", points = [0.0, 0.2, 0.8, 1.0] },
                { name = "bell", shape = "gaussian", mean = 0.5, stdev = 0.1 },
                { name = "spike", shape = "singleton", point = 0.3 },
            ]
            "#,
        )
        .unwrap();

        let terms = &doc.function_blocks[0].output.terms;
        assert_eq!(terms[0].membership(), MembershipFunction::Triangular(0.0, 0.5, 1.0));
        assert_eq!(terms[1].membership(), MembershipFunction::Trapezoidal(0.0, 0.2, 0.8, 1.0));
        assert_eq!(terms[2].membership(), MembershipFunction::Gaussian(0.5, 0.1));
        assert_eq!(terms[3].membership(), MembershipFunction::Singleton(0.3));
        assert_eq!(terms[3].name(), "spike");
    }

    #[test]
    fn test_rule_defaults() {
        let rule: RuleDef = toml::from_str(
            r#"
            if = [["acting", "good"]]
            then = ["quality", "good"]
            "#,
        )
        .unwrap();
        assert_eq!(rule.connective, ConnectiveDef::And);
        assert_eq!(rule.weight, 1.0);
        assert_eq!(rule.to_rule().consequent(), &Clause::new("quality", "good"));
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let result: Result<VariableDef, _> = toml::from_str(
            r#"
            name = "x"
            range = [0.0, 1.0]
            terms = [{ name = "t", shape = "sigmoid", points = [0.0] }]
            "#,
        );
        assert!(result.is_err());
    }
}
