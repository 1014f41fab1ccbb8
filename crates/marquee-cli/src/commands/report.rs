//! Report command implementation.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use marquee_domain::traits::FilmSource;
use marquee_engine::InferenceEngine;

/// Execute the report command.
pub fn execute_report<S>(
    id: &str,
    source: &S,
    engine: &InferenceEngine,
    format: OutputFormat,
) -> Result<()>
where
    S: FilmSource<Error = CliError>,
{
    println!("{}", render_report(id, source, engine, format)?);
    Ok(())
}

/// Build the evaluation report for one film.
pub fn render_report<S>(
    id: &str,
    source: &S,
    engine: &InferenceEngine,
    format: OutputFormat,
) -> Result<String>
where
    S: FilmSource<Error = CliError>,
{
    let film = source
        .get_film(id)?
        .ok_or_else(|| CliError::FilmNotFound(id.to_string()))?;

    match format {
        OutputFormat::Table => Ok(engine.detailed_report(&film)?),
        OutputFormat::Json => {
            let evaluation = engine.evaluate_film(&film)?;
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "film": film,
                "evaluation": evaluation,
            }))?)
        }
        OutputFormat::Quiet => Ok(format!("{:.2}", engine.evaluate_film(&film)?.score)),
    }
}
