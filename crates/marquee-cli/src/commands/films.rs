//! Films command implementation.

use crate::cli::FilmsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use marquee_domain::traits::{FilmQuery, FilmSource};
use marquee_engine::{FilmEvaluation, InferenceEngine};

/// Execute the films command.
pub fn execute_films<S>(
    args: FilmsArgs,
    source: &S,
    engine: &InferenceEngine,
    formatter: &Formatter,
) -> Result<()>
where
    S: FilmSource<Error = CliError>,
{
    let evaluations = evaluate_films(&args, source, engine)?;
    println!("{}", formatter.format_films(&evaluations)?);
    Ok(())
}

/// Select films matching `args` and evaluate each one.
pub fn evaluate_films<S>(
    args: &FilmsArgs,
    source: &S,
    engine: &InferenceEngine,
) -> Result<Vec<FilmEvaluation>>
where
    S: FilmSource<Error = CliError>,
{
    let query = build_query(args)?;
    let films = source.query_films(&query)?;
    tracing::debug!(matched = films.len(), "Evaluating films");

    films
        .iter()
        .map(|film| engine.evaluate_film(film).map_err(CliError::from))
        .collect()
}

fn build_query(args: &FilmsArgs) -> Result<FilmQuery> {
    let year_range = match (args.from, args.to) {
        (None, None) => None,
        (from, to) => {
            let (start, end) = (from.unwrap_or(0), to.unwrap_or(u16::MAX));
            if start > end {
                return Err(CliError::InvalidInput(format!(
                    "--from {start} is after --to {end}"
                )));
            }
            Some((start, end))
        }
    };

    Ok(FilmQuery {
        genre: args.genre.clone(),
        director: args.director.clone(),
        year_range,
        limit: args.limit,
    })
}
