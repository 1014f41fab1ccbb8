//! Film-level evaluation and human-readable reports

use crate::context::{EvaluationContext, EvaluationResult};
use crate::{EngineError, InferenceEngine};
use marquee_domain::{Film, QualityCategory};
use serde::Serialize;

/// Quality verdict for one film
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmEvaluation {
    /// Film identifier
    pub film_id: String,

    /// Film title
    pub title: String,

    /// Crisp quality score
    pub score: f64,

    /// Band of the score
    pub category: QualityCategory,

    /// Full engine output
    #[serde(skip)]
    pub result: EvaluationResult,
}

impl InferenceEngine {
    /// Evaluate a film's quality scores
    pub fn evaluate_film(&self, film: &Film) -> Result<FilmEvaluation, EngineError> {
        let result = self.evaluate(&EvaluationContext::from(&film.scores))?;
        Ok(FilmEvaluation {
            film_id: film.id.clone(),
            title: film.title.clone(),
            score: result.value,
            category: result.category(),
            result,
        })
    }

    /// Multi-line report: input scores, overall score and category
    pub fn detailed_report(&self, film: &Film) -> Result<String, EngineError> {
        let evaluation = self.evaluate_film(film)?;
        let scores = &film.scores;

        let divider = "-------------------------------------\n";
        let mut out = String::new();
        out.push_str(&format!("Film: {}\n", film.title));
        out.push_str("=====================================\n");
        out.push_str("Input Scores:\n");
        out.push_str(&format!("  Direction: {}/10\n", scores.direction));
        out.push_str(&format!("  Acting: {}/10\n", scores.acting));
        out.push_str(&format!("  Screenplay: {}/10\n", scores.screenplay));
        out.push_str(&format!("  Visual Effects: {}/10\n", scores.visual_effects));
        out.push_str(&format!("  Cultural Significance: {}/10\n", scores.cultural_significance));
        out.push_str(divider);
        out.push_str("Fuzzy Logic Evaluation:\n");
        out.push_str(&format!("  Overall Quality Score: {:.2}/10\n", evaluation.score));
        out.push_str(&format!("  Quality Category: {}\n", evaluation.category));

        let fired = evaluation.result.fired_rules();
        if !fired.is_empty() {
            out.push_str(divider);
            out.push_str("Strongest Rules:\n");
            for firing in fired.iter().take(3) {
                let rule = &self.rule_base().rules()[firing.rule];
                out.push_str(&format!("  [{:.2}] {}\n", firing.strength, rule));
            }
        }
        out.push_str("=====================================\n");

        Ok(out)
    }
}
