//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use marquee_domain::{QualityScores, RuleBase};
use marquee_engine::{EvaluationResult, FilmEvaluation, QualityCategory};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of evaluating one set of scores.
    ///
    /// With `explain`, the rules that fired are listed strongest first.
    pub fn format_evaluation(
        &self,
        scores: &QualityScores,
        result: &EvaluationResult,
        rule_base: &RuleBase,
        explain: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let inputs: serde_json::Map<String, serde_json::Value> = scores
                    .inputs()
                    .iter()
                    .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
                    .collect();
                let mut json = serde_json::json!({
                    "inputs": inputs,
                    "score": result.value,
                    "category": result.category(),
                    "activations": result
                        .activations
                        .iter()
                        .map(|(term, degree)| serde_json::json!({ "term": term, "degree": degree }))
                        .collect::<Vec<_>>(),
                });
                if explain {
                    json["fired_rules"] = result
                        .fired_rules()
                        .iter()
                        .map(|firing| {
                            serde_json::json!({
                                "rule": rule_base.rules()[firing.rule].to_string(),
                                "strength": firing.strength,
                            })
                        })
                        .collect();
                }
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(format!("{:.2}", result.value)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Input", "Score"]);
                for (name, value) in scores.inputs() {
                    builder.push_record([name.to_string(), format!("{value:.1}")]);
                }
                let mut out = self.table(builder);
                out.push_str(&format!(
                    "\nOverall quality: {:.2}/10  {}\n",
                    result.value,
                    self.category(result.category())
                ));

                if explain {
                    out.push('\n');
                    out.push_str(&self.format_firings(result, rule_base));
                }
                Ok(out)
            }
        }
    }

    fn format_firings(&self, result: &EvaluationResult, rule_base: &RuleBase) -> String {
        let fired = result.fired_rules();
        if fired.is_empty() {
            return self.colorize("No rule strengths recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Strength", "Rule"]);
        for firing in fired {
            builder.push_record([
                (firing.rule + 1).to_string(),
                format!("{:.3}", firing.strength),
                rule_base.rules()[firing.rule].to_string(),
            ]);
        }
        self.table(builder)
    }

    /// Format the band of a crisp score.
    pub fn format_category(&self, score: f64) -> Result<String> {
        let category = marquee_engine::categorize(score);
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "score": score,
                "category": category,
            }))?),
            OutputFormat::Quiet => Ok(category.as_str().to_string()),
            OutputFormat::Table => Ok(format!("{score:.2}/10  {}", self.category(category))),
        }
    }

    /// Format evaluated catalog films.
    pub fn format_films(&self, films: &[FilmEvaluation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(films)?),
            OutputFormat::Quiet => Ok(films
                .iter()
                .map(|f| format!("{}\t{:.2}", f.film_id, f.score))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if films.is_empty() {
                    return Ok(self.colorize("No films found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Title", "Score", "Category"]);
                for film in films {
                    builder.push_record([
                        film.film_id.clone(),
                        film.title.clone(),
                        format!("{:.2}", film.score),
                        self.category(film.category),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a rule base: variables with their terms, then the rules.
    pub fn format_rules(&self, rule_base: &RuleBase) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let variables: Vec<serde_json::Value> = rule_base
                    .inputs()
                    .iter()
                    .chain(std::iter::once(rule_base.output()))
                    .map(|var| {
                        let (min, max) = var.domain();
                        serde_json::json!({
                            "name": var.name(),
                            "output": var.name() == rule_base.output().name(),
                            "range": [min, max],
                            "terms": var
                                .terms()
                                .map(|(term, mf)| serde_json::json!({ "name": term, "membership": mf.to_string() }))
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                let rules: Vec<String> = rule_base.rules().iter().map(ToString::to_string).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "name": rule_base.name(),
                    "variables": variables,
                    "rules": rules,
                }))?)
            }
            OutputFormat::Quiet => Ok(rule_base
                .rules()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut vars = Builder::default();
                vars.push_record(["Variable", "Kind", "Range", "Terms"]);
                let output = std::iter::once((rule_base.output(), "output"));
                for (var, kind) in rule_base.inputs().iter().map(|v| (v, "input")).chain(output) {
                    let (min, max) = var.domain();
                    let terms: Vec<String> = var
                        .terms()
                        .map(|(term, mf)| format!("{term} {mf}"))
                        .collect();
                    vars.push_record([
                        var.name().to_string(),
                        kind.to_string(),
                        format!("[{min}, {max}]"),
                        terms.join("\n"),
                    ]);
                }

                let mut rules = Builder::default();
                rules.push_record(["#", "Rule"]);
                for (idx, rule) in rule_base.rules().iter().enumerate() {
                    rules.push_record([(idx + 1).to_string(), rule.to_string()]);
                }

                Ok(format!(
                    "{}\n{}\n\n{}",
                    self.colorize(&format!("Rule base: {}", rule_base.name()), "cyan"),
                    self.table(vars),
                    self.table(rules)
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Band label, colored by band.
    fn category(&self, category: QualityCategory) -> String {
        let color = match category {
            QualityCategory::Bad => "red",
            QualityCategory::Mediocre => "yellow",
            QualityCategory::Good => "cyan",
            QualityCategory::Excellent => "green",
        };
        self.colorize(category.as_str(), color)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
