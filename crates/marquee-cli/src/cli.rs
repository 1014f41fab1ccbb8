//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Marquee CLI - Fuzzy-logic film quality evaluation.
#[derive(Debug, Parser)]
#[command(name = "marquee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MARQUEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rule-base TOML file (defaults to the bundled film-quality rules)
    #[arg(short, long, global = true, env = "MARQUEE_RULES")]
    pub rules: Option<PathBuf>,

    /// Function block to load from the rule file
    #[arg(long, global = true)]
    pub block: Option<String>,

    /// Film catalog JSON file
    #[arg(long, global = true, env = "MARQUEE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (scores only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a set of quality scores
    Evaluate(EvaluateArgs),

    /// Map a crisp score to its quality band
    Categorize {
        /// Score on the 0-10 scale
        score: f64,
    },

    /// List catalog films with their evaluated quality
    Films(FilmsArgs),

    /// Detailed evaluation report for one catalog film
    Report {
        /// Film id
        id: String,
    },

    /// Show the variables, terms and rules of the loaded rule base
    Rules(RulesArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Direction score (0-10)
    #[arg(short, long)]
    pub direction: f64,

    /// Acting score (0-10)
    #[arg(short, long)]
    pub acting: f64,

    /// Screenplay score (0-10)
    #[arg(short, long)]
    pub screenplay: f64,

    /// Visual effects score (0-10)
    #[arg(short = 'x', long)]
    pub visual_effects: f64,

    /// Cultural significance score (0-10)
    #[arg(short = 'C', long)]
    pub cultural_significance: f64,

    /// List the rules that fired, strongest first
    #[arg(short, long)]
    pub explain: bool,
}

/// Arguments for the films command.
#[derive(Debug, Parser)]
pub struct FilmsArgs {
    /// Only films tagged with this genre
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Only films whose director's name contains this text
    #[arg(short, long)]
    pub director: Option<String>,

    /// Earliest release year
    #[arg(long)]
    pub from: Option<u16>,

    /// Latest release year
    #[arg(long)]
    pub to: Option<u16>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the rules command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Print the rule base in its TOML description format
    #[arg(long)]
    pub export: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_evaluate_command() {
        let cli = Cli::parse_from([
            "marquee",
            "evaluate",
            "--direction",
            "9.5",
            "--acting",
            "9",
            "--screenplay",
            "9",
            "--visual-effects",
            "8.5",
            "--cultural-significance",
            "9",
            "--explain",
        ]);
        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.direction, 9.5);
                assert_eq!(args.cultural_significance, 9.0);
                assert!(args.explain);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_films_year_range() {
        let cli = Cli::parse_from(["marquee", "films", "--from", "1990", "--to", "1999"]);
        match cli.command {
            Command::Films(args) => {
                assert_eq!(args.from, Some(1990));
                assert_eq!(args.to, Some(1999));
                assert!(args.genre.is_none());
            }
            _ => panic!("Expected Films command"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["marquee", "-vv", "categorize", "7.2"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Categorize { score } if score == 7.2));
    }
}
