//! Marquee CLI - Command-line interface for fuzzy film quality evaluation.

use clap::Parser;
use marquee_cli::commands;
use marquee_cli::{Cli, Command, Config, Formatter};
use marquee_engine::InferenceEngine;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> marquee_cli::Result<()> {
    // Load config
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let rules_path = cli.rules.as_deref().or(config.rules_path.as_deref());
    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());

    let block = cli.block.as_deref();
    let engine = || -> marquee_cli::Result<InferenceEngine> {
        let rule_base = marquee_cli::load_rule_base(rules_path, block)?;
        marquee_cli::build_engine(rule_base, &config.engine)
    };

    match cli.command {
        Command::Evaluate(args) => {
            commands::execute_evaluate(args, &engine()?, &formatter)?;
        }
        Command::Categorize { score } => {
            commands::execute_categorize(score, &formatter)?;
        }
        Command::Films(args) => {
            let catalog = marquee_cli::open_catalog(catalog_path)?;
            commands::execute_films(args, &catalog, &engine()?, &formatter)?;
        }
        Command::Report { id } => {
            let catalog = marquee_cli::open_catalog(catalog_path)?;
            commands::execute_report(&id, &catalog, &engine()?, format)?;
        }
        Command::Rules(args) => {
            let rule_base = marquee_cli::load_rule_base(rules_path, block)?;
            commands::execute_rules(args, &rule_base, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
