//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "skycast-cli")]
#[command(author, version, about = "Weather search, forecast and CSV export", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct LocationArgs {
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    country: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    Search {
        term: String,
    },
    Show {
        #[command(flatten)]
        location: LocationArgs,
    },
    Export {
        #[command(flatten)]
        location: LocationArgs,
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_search_command() {
    let cli = parse_args(&["skycast-cli", "search", "London"]).unwrap();
    if let Commands::Search { term } = cli.command {
        assert_eq!(term, "London");
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn cli_search_handles_multiword_term() {
    let cli = parse_args(&["skycast-cli", "search", "Rio de Janeiro"]).unwrap();
    if let Commands::Search { term } = cli.command {
        assert_eq!(term, "Rio de Janeiro");
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn cli_search_requires_term() {
    assert!(parse_args(&["skycast-cli", "search"]).is_err());
}

#[test]
fn cli_parses_show_command() {
    let cli = parse_args(&[
        "skycast-cli",
        "show",
        "--lat",
        "51.5073219",
        "--lng",
        "-0.1276474",
        "--name",
        "London",
        "--country",
        "GB",
    ])
    .unwrap();

    if let Commands::Show { location } = cli.command {
        assert!((location.lat - 51.507_321_9).abs() < f64::EPSILON);
        assert!((location.lng + 0.127_647_4).abs() < f64::EPSILON);
        assert_eq!(location.name, "London");
        assert_eq!(location.country, "GB");
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_show_country_defaults_to_empty() {
    let cli = parse_args(&[
        "skycast-cli", "show", "--lat", "1", "--lng", "2", "--name", "Somewhere",
    ])
    .unwrap();

    if let Commands::Show { location } = cli.command {
        assert_eq!(location.country, "");
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_show_requires_coordinates() {
    assert!(parse_args(&["skycast-cli", "show", "--name", "London"]).is_err());
}

#[test]
fn cli_show_rejects_non_numeric_latitude() {
    let result = parse_args(&[
        "skycast-cli", "show", "--lat", "north", "--lng", "2", "--name", "X",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_export_uses_default_output() {
    let cli = parse_args(&[
        "skycast-cli", "export", "--lat", "1", "--lng", "2", "--name", "London",
    ])
    .unwrap();

    if let Commands::Export { output, location } = cli.command {
        assert_eq!(output, PathBuf::from("."));
        assert_eq!(location.name, "London");
    } else {
        panic!("Expected Export command");
    }
}

#[test]
fn cli_export_with_custom_output() {
    let cli = parse_args(&[
        "skycast-cli",
        "export",
        "--lat",
        "1",
        "--lng",
        "2",
        "--name",
        "London",
        "-o",
        "/tmp/exports",
    ])
    .unwrap();

    if let Commands::Export { output, .. } = cli.command {
        assert_eq!(output, PathBuf::from("/tmp/exports"));
    } else {
        panic!("Expected Export command");
    }
}

#[test]
fn cli_parses_config_flag() {
    let cli = parse_args(&["skycast-cli", "--config", "skycast.toml", "search", "Paris"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("skycast.toml")));
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = parse_args(&["skycast-cli", "search", "Paris", "-vv", "-c", "x.toml"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
}

#[test]
fn cli_verbosity_zero_by_default() {
    let cli = parse_args(&["skycast-cli", "search", "Paris"]).unwrap();
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["skycast-cli"]).is_err());
}
