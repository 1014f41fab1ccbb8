//! Inference rules

use crate::variable::TermDegrees;
use std::collections::HashMap;
use std::fmt;

/// Fuzzified inputs: variable name -> term name -> degree
pub type InputDegrees = HashMap<String, TermDegrees>;

/// A `variable IS term` test, used both in antecedents and consequents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    /// Variable name
    pub variable: String,

    /// Term name
    pub term: String,
}

impl Clause {
    /// Create a clause
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IS {}", self.variable, self.term)
    }
}

/// How the antecedent clauses of one rule are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connective {
    /// Minimum of the clause degrees
    #[default]
    And,

    /// Maximum of the clause degrees
    Or,
}

impl Connective {
    /// Keyword used when printing rules
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }

    /// Parse a connective (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "and" => Some(Connective::And),
            "or" => Some(Connective::Or),
            _ => None,
        }
    }

    fn combine(&self, degrees: impl Iterator<Item = f64>) -> f64 {
        match self {
            Connective::And => degrees.fold(1.0, f64::min),
            Connective::Or => degrees.fold(0.0, f64::max),
        }
    }
}

/// IF clause {AND|OR} clause ... THEN output IS term, with a static weight
///
/// Rules are immutable once constructed. Variable and term references are
/// checked when the rule base is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Vec<Clause>,
    connective: Connective,
    consequent: Clause,
    weight: f64,
}

impl Rule {
    /// Create a rule with weight 1.0
    pub fn new(antecedent: Vec<Clause>, connective: Connective, consequent: Clause) -> Self {
        Self {
            antecedent,
            connective,
            consequent,
            weight: 1.0,
        }
    }

    /// Set the rule weight (builder style)
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Antecedent clauses in declaration order
    pub fn antecedent(&self) -> &[Clause] {
        &self.antecedent
    }

    /// Clause combinator
    pub fn connective(&self) -> Connective {
        self.connective
    }

    /// Output clause
    pub fn consequent(&self) -> &Clause {
        &self.consequent
    }

    /// Static weight in [0, 1]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Firing strength in [0, 1] for the given fuzzified inputs
    ///
    /// Strength is `weight * combine(clause degrees)`. A clause whose
    /// variable or term is absent from `degrees` counts as degree 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_domain::{Clause, Connective, InputDegrees, Rule};
    ///
    /// let rule = Rule::new(
    ///     vec![Clause::new("acting", "good"), Clause::new("direction", "good")],
    ///     Connective::And,
    ///     Clause::new("quality", "excellent"),
    /// )
    /// .with_weight(0.5);
    ///
    /// let mut degrees = InputDegrees::new();
    /// degrees.insert("acting".into(), [("good".to_string(), 0.8)].into());
    /// degrees.insert("direction".into(), [("good".to_string(), 0.6)].into());
    ///
    /// assert!((rule.fire(&degrees) - 0.3).abs() < 1e-12);
    /// ```
    pub fn fire(&self, degrees: &InputDegrees) -> f64 {
        let clause_degrees = self.antecedent.iter().map(|clause| {
            degrees
                .get(&clause.variable)
                .and_then(|terms| terms.get(&clause.term))
                .copied()
                .unwrap_or(0.0)
        });

        (self.weight * self.connective.combine(clause_degrees)).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (idx, clause) in self.antecedent.iter().enumerate() {
            if idx > 0 {
                write!(f, " {} ", self.connective.as_str())?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, " THEN {}", self.consequent)?;
        if self.weight != 1.0 {
            write!(f, " WITH {}", self.weight)?;
        }
        Ok(())
    }
}
