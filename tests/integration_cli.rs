//! Integration tests for the convert command with JSON-lines files
//!
//! These tests run the command logic against temporary input, output and
//! configuration files, without installing the global log subscriber.

use attributes_to_csv::cli::args::{Args, Commands, ConvertArgs};
use attributes_to_csv::cli::commands;
use attributes_to_csv::FlowRecord;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INPUT: &str = r#"{"attributes":{"beach-name":"Malibu Beach","beach-location":"California, US","uuid":"u-1"},"content":"one"}
{"attributes":{"beach-name":"Huntington","other":"x","uuid":"u-2"},"content":"two"}
this line is not a record
"#;

fn convert_args(argv: &[&str]) -> ConvertArgs {
    let mut full = vec!["attributes-to-csv", "convert"];
    full.extend_from_slice(argv);

    match Args::try_parse_from(full).unwrap().command {
        Some(Commands::Convert(args)) => args,
        other => panic!("expected convert command, got {:?}", other),
    }
}

fn read_records(path: &Path) -> Vec<FlowRecord> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

struct Workspace {
    _dir: TempDir,
    input: String,
    output: String,
    failure: String,
    config: String,
}

fn workspace(config_toml: &str) -> Workspace {
    let dir = TempDir::new().unwrap();
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

    let workspace = Workspace {
        input: path("input.jsonl"),
        output: path("output.jsonl"),
        failure: path("failure.jsonl"),
        config: path("config.toml"),
        _dir: dir,
    };

    fs::write(&workspace.input, INPUT).unwrap();
    fs::write(&workspace.config, config_toml).unwrap();
    workspace
}

/// Convert records into new attributes using settings from the config file
///
/// Purpose: Validate the file-based configuration layer end to end
/// Benefit: Ensures TOML keys reach the converter unchanged
#[tokio::test]
async fn test_convert_with_config_file() {
    let ws = workspace(
        r#"
        attribute-regex = "beach-.*"
        include-core-attributes = false
        include-schema = true
        workers = 2
        "#,
    );

    let args = convert_args(&[
        "-i", &ws.input, "-o", &ws.output, "--failure", &ws.failure, "-c", &ws.config,
    ]);
    let stats = commands::convert(&args).await.unwrap();

    assert_eq!(stats.converted, 2);
    assert_eq!(stats.rejected, 1);

    let records = read_records(Path::new(&ws.output));
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].attribute("CSVData"),
        Some("Malibu Beach,\"California, US\"")
    );
    assert_eq!(
        records[0].attribute("CSVSchema"),
        Some("beach-name,beach-location")
    );
    assert_eq!(records[1].attribute("CSVData"), Some("Huntington"));
    assert_eq!(records[1].content, "two");

    let failures = fs::read_to_string(&ws.failure).unwrap();
    assert_eq!(failures, "this line is not a record\n");
}

/// Command-line flags override the configuration file
#[tokio::test]
async fn test_cli_flags_override_config() {
    let ws = workspace(
        r#"
        attribute-regex = "beach-.*"
        include-core-attributes = false
        "#,
    );

    let args = convert_args(&[
        "-i",
        &ws.input,
        "-o",
        &ws.output,
        "-c",
        &ws.config,
        "--attribute-regex",
        "beach-name",
        "--destination",
        "replace-body",
    ]);
    commands::convert(&args).await.unwrap();

    let records = read_records(Path::new(&ws.output));
    assert_eq!(records[0].content, "Malibu Beach");
    assert_eq!(records[0].attribute("mime.type"), Some("text/csv"));
    assert_eq!(records[1].content, "Huntington");
}

/// Decoded records receive core attributes before conversion
#[tokio::test]
async fn test_core_attributes_assigned_on_input() {
    let ws = workspace("attribute-list = \"beach-name\"\n");

    let args = convert_args(&["-i", &ws.input, "-o", &ws.output, "-c", &ws.config]);
    commands::convert(&args).await.unwrap();

    let records = read_records(Path::new(&ws.output));
    assert_eq!(records[0].attribute("CSVData"), Some("Malibu Beach,./,u-1,u-1"));
}

/// An invalid pattern fails before any output is written
#[tokio::test]
async fn test_invalid_pattern_fails_command() {
    let ws = workspace("attribute-regex = \"beach-(\"\n");

    let args = convert_args(&["-i", &ws.input, "-o", &ws.output, "-c", &ws.config]);
    let error = commands::convert(&args).await.unwrap_err();

    assert!(error.is_invalid_pattern());
    assert!(!Path::new(&ws.output).exists());
}
