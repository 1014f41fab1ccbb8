//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use marquee_domain::QualityScores;
use marquee_engine::{EvaluationContext, InferenceEngine};

/// Execute the evaluate command.
pub fn execute_evaluate(
    args: EvaluateArgs,
    engine: &InferenceEngine,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_evaluation(&args, engine, formatter)?);
    Ok(())
}

/// Evaluate the scores in `args` and format the outcome.
pub fn render_evaluation(
    args: &EvaluateArgs,
    engine: &InferenceEngine,
    formatter: &Formatter,
) -> Result<String> {
    let scores = QualityScores::new(
        args.direction,
        args.acting,
        args.screenplay,
        args.visual_effects,
        args.cultural_significance,
    );

    for (name, value) in scores.inputs() {
        if !value.is_finite() {
            return Err(CliError::InvalidInput(format!("{name} must be a finite number")));
        }
        if !(0.0..=10.0).contains(&value) {
            tracing::warn!(input = name, value, "Score outside the 0-10 scale");
        }
    }

    let result = engine.evaluate(&EvaluationContext::from(&scores))?;
    formatter.format_evaluation(&scores, &result, engine.rule_base(), args.explain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(values: [f64; 5]) -> EvaluateArgs {
        EvaluateArgs {
            direction: values[0],
            acting: values[1],
            screenplay: values[2],
            visual_effects: values[3],
            cultural_significance: values[4],
            explain: false,
        }
    }

    #[test]
    fn test_render_quiet_score() {
        let engine = InferenceEngine::with_defaults(marquee_rules::film_quality().unwrap());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output = render_evaluation(&args([9.5, 9.0, 9.0, 8.5, 9.0]), &engine, &formatter).unwrap();
        let score: f64 = output.parse().unwrap();
        assert!(score > 7.0);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let engine = InferenceEngine::with_defaults(marquee_rules::film_quality().unwrap());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = render_evaluation(&args([9.0, f64::NAN, 9.0, 9.0, 9.0]), &engine, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
