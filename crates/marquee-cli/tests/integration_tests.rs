//! Integration tests for marquee-cli
//!
//! These tests drive the library API with files on disk: configs, catalogs
//! and rule descriptions.

use clap::Parser;
use marquee_cli::cli::{EvaluateArgs, FilmsArgs};
use marquee_cli::commands::evaluate::render_evaluation;
use marquee_cli::commands::films::evaluate_films;
use marquee_cli::config::OutputFormat;
use marquee_cli::{build_engine, load_rule_base, open_catalog, Cli, CliError, Command, Config, Formatter};
use marquee_domain::traits::FilmSource;
use std::fs;

const CATALOG: &str = r#"[
    {
        "id": "x1",
        "title": "Night Train",
        "release_year": 1999,
        "genres": ["Thriller"],
        "director": { "id": "d1", "name": "Ana Petrovic", "role": "director" },
        "scores": { "direction": 8.0, "acting": 8.5, "screenplay": 7.5, "visual_effects": 9.0, "cultural_significance": 8.0 }
    },
    {
        "id": "x2",
        "title": "Paper Boats",
        "release_year": 2005,
        "genres": ["Drama"],
        "scores": { "direction": 2.0, "acting": 2.0, "screenplay": 2.0, "visual_effects": 2.0, "cultural_significance": 2.0 }
    }
]"#;

#[test]
fn test_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.json");
    fs::write(&path, CATALOG).unwrap();

    let catalog = open_catalog(Some(path.as_path())).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.films_by_genre("thriller").unwrap().len(), 1);
    assert_eq!(catalog.films_by_director("petrovic").unwrap()[0].id, "x1");
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = open_catalog(Some(dir.path().join("absent.json").as_path()));
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_catalog_entry_without_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.json");
    fs::write(&path, r#"[{ "id": "x3", "title": "Unrated Cut", "genres": ["Drama"] }]"#).unwrap();

    let result = open_catalog(Some(path.as_path()));
    assert!(matches!(result, Err(CliError::Serialization(_))));
}

#[test]
fn test_evaluate_catalog_with_configured_engine() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("films.json");
    let config_path = dir.path().join("config.toml");
    fs::write(&catalog_path, CATALOG).unwrap();
    fs::write(
        &config_path,
        format!(
            "catalog_path = {:?}\n\n[engine]\nresolution = 1001\n",
            catalog_path.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.engine.resolution, 1001);

    let engine = build_engine(load_rule_base(None, None).unwrap(), &config.engine).unwrap();
    let catalog = open_catalog(config.catalog_path.as_deref()).unwrap();
    let args = FilmsArgs {
        genre: None,
        director: None,
        from: None,
        to: None,
        limit: None,
    };

    let evaluations = evaluate_films(&args, &catalog, &engine).unwrap();
    assert_eq!(evaluations.len(), 2);
    assert!((0.0..=10.0).contains(&evaluations[0].score));
    assert!(evaluations[1].score < 5.0);
}

#[test]
fn test_exported_rules_reload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");

    let bundled = load_rule_base(None, None).unwrap();
    fs::write(&path, marquee_rules::to_toml(&bundled).unwrap()).unwrap();

    let reloaded = load_rule_base(Some(path.as_path()), Some("film_quality_assessment")).unwrap();
    assert_eq!(reloaded, bundled);

    let result = load_rule_base(Some(path.as_path()), Some("other"));
    assert!(matches!(result, Err(CliError::Rules(_))));
}

#[test]
fn test_custom_rule_base_missing_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
        [[function_block]]
        name = "budget"

        [[function_block.input]]
        name = "budget"
        range = [0.0, 100.0]
        terms = [{ name = "high", shape = "trapezoidal", points = [20.0, 60.0, 100.0, 100.0] }]

        [function_block.output]
        name = "quality"
        range = [0.0, 10.0]
        terms = [{ name = "good", shape = "triangular", points = [4.0, 6.0, 8.0] }]

        [[function_block.rule]]
        if = [["budget", "high"]]
        then = ["quality", "good"]
        "#,
    )
    .unwrap();

    let engine = build_engine(load_rule_base(Some(path.as_path()), None).unwrap(), &Default::default()).unwrap();
    let args = EvaluateArgs {
        direction: 5.0,
        acting: 5.0,
        screenplay: 5.0,
        visual_effects: 5.0,
        cultural_significance: 5.0,
        explain: false,
    };

    let result = render_evaluation(&args, &engine, &Formatter::new(OutputFormat::Quiet, false));
    assert!(matches!(result, Err(CliError::Engine(_))));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "marquee",
        "report",
        "film001",
        "--format",
        "json",
        "--catalog",
        "/tmp/films.json",
        "--no-color",
    ]);

    assert!(cli.no_color);
    assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("/tmp/films.json")));
    assert!(matches!(cli.command, Command::Report { ref id } if id == "film001"));
}
