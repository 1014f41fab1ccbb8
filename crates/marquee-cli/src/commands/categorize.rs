//! Categorize command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the categorize command.
pub fn execute_categorize(score: f64, formatter: &Formatter) -> Result<()> {
    if !score.is_finite() {
        return Err(CliError::InvalidInput("Score must be a finite number".to_string()));
    }
    println!("{}", formatter.format_category(score)?);
    Ok(())
}
