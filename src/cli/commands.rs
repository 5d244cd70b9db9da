//! Command implementations for attributes-to-csv CLI
//!
//! This module contains the command execution logic, JSON-lines record I/O
//! and summary reporting for the CLI interface.

use crate::app::models::FlowRecord;
use crate::app::services::csv_codec::split_fields;
use crate::app::services::record_converter::{ConversionStats, RecordConverter, RoutedRecord};
use crate::cli::args::{Args, Commands, ConvertArgs, SplitArgs};
use crate::config::ConverterConfig;
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info, warn};

/// An input line that could not be decoded into a record
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based input line number
    pub line: usize,
    /// Line text as read
    pub raw: String,
    /// Decoding failure
    pub error: Error,
}

/// Records decoded from JSON-lines input
#[derive(Debug, Default)]
pub struct DecodedInput {
    /// Records in input order
    pub records: Vec<FlowRecord>,
    /// Lines that did not decode
    pub rejected: Vec<RejectedLine>,
}

/// Main command runner
///
/// Sets up logging once, then dispatches to the requested command.
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Some(Commands::Convert(convert_args)) => {
            let stats = convert(convert_args).await?;
            if !convert_args.quiet {
                print_summary(&stats);
            }
            Ok(())
        }
        Some(Commands::Split(split_args)) => split(split_args),
        None => Ok(()),
    }
}

/// Run the convert command without touching global logging state
///
/// # Arguments
///
/// * `args` - Parsed convert arguments
///
/// # Returns
///
/// Batch statistics, including input lines rejected before conversion
pub async fn convert(args: &ConvertArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();
    info!("Starting attribute conversion");

    args.validate()?;

    let config = load_configuration(args)?;
    debug!("Loaded configuration: {:?}", config);

    let converter = RecordConverter::new(config.selection_config()?);

    let text = read_input(args.input_path.as_deref()).await?;
    let decoded = decode_records(&text);
    info!(
        "Decoded {} records ({} malformed lines)",
        decoded.records.len(),
        decoded.rejected.len()
    );

    let mut result = converter
        .convert_batch(decoded.records, config.workers)
        .await?;

    for rejected in &decoded.rejected {
        warn!("Rejected input: {}", rejected.error);
        result.stats.add_rejected(rejected.error.to_string());
    }

    let output = encode_records(result.successes())?;
    write_output(args.output_path.as_deref(), &output).await?;

    let failures = encode_failures(result.failures(), &decoded.rejected)?;
    match &args.failure_path {
        Some(path) => write_output(Some(path), &failures).await?,
        None if !failures.is_empty() => warn!(
            "{} failed records discarded, use --failure to keep them",
            result.stats.failed + result.stats.rejected
        ),
        None => {}
    }

    info!(
        "Conversion finished in {:.2?}: {}",
        start_time.elapsed(),
        result.stats.summary()
    );

    Ok(result.stats)
}

/// Run the split command, printing one token per line
pub fn split(args: &SplitArgs) -> Result<()> {
    let tokens = split_fields(&args.list);
    debug!("Split {:?} into {} tokens", args.list, tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        println!("{} {:?}", format!("[{}]", index).bright_yellow().bold(), token);
    }

    Ok(())
}

/// Decode JSON-lines text into records, assigning missing core attributes
///
/// Blank lines are skipped. Lines that are not a valid record are returned
/// as rejected with their 1-based line number.
pub fn decode_records(text: &str) -> DecodedInput {
    let mut decoded = DecodedInput::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<FlowRecord>(line) {
            Ok(mut record) => {
                record.ensure_core_attributes();
                decoded.records.push(record);
            }
            Err(e) => decoded.rejected.push(RejectedLine {
                line: index + 1,
                raw: line.to_string(),
                error: Error::record_format(index + 1, e.to_string()),
            }),
        }
    }

    decoded
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("attributes_to_csv={}", log_level)));

    if args.is_quiet() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
fn load_configuration(args: &ConvertArgs) -> Result<ConverterConfig> {
    let default_config_path = if args.config_file.is_none() {
        ConverterConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = ConverterConfig::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut ConverterConfig, args: &ConvertArgs) {
    if let Some(list) = &args.attribute_list {
        config.attribute_list = Some(list.clone());
    }

    if let Some(pattern) = &args.attribute_regex {
        config.attribute_regex = Some(pattern.clone());
    }

    if let Some(destination) = args.destination {
        config.destination = destination.into();
    }

    if args.exclude_core_attributes {
        config.include_core_attributes = false;
    }

    if args.include_schema {
        config.include_schema = true;
    }

    if args.null_value {
        config.null_for_empty = true;
    }

    if let Some(workers) = args.workers {
        config.workers = workers;
    }
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(format!("Failed to read input file {}", path.display()), e)
        }),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| Error::io("Failed to read records from stdin", e))?;
            Ok(text)
        }
    }
}

async fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, text).await.map_err(|e| {
            Error::io(format!("Failed to write output file {}", path.display()), e)
        }),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
            Ok(())
        }
    }
}

/// Serialize records as JSON lines
fn encode_records<'a>(records: impl Iterator<Item = &'a RoutedRecord>) -> Result<String> {
    let mut output = String::new();
    for (index, routed) in records.enumerate() {
        let line = serde_json::to_string(&routed.record)
            .map_err(|e| Error::record_serialization(index + 1, e))?;
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

/// Serialize failed records, followed by malformed input lines verbatim
fn encode_failures<'a>(
    records: impl Iterator<Item = &'a RoutedRecord>,
    rejected: &[RejectedLine],
) -> Result<String> {
    let mut output = encode_records(records)?;
    for line in rejected {
        output.push_str(&line.raw);
        output.push('\n');
    }
    Ok(output)
}

fn print_summary(stats: &ConversionStats) {
    eprintln!("\n{}", "Conversion Summary".bright_green().bold());
    eprintln!(
        "  Records converted: {}",
        stats.converted.to_string().bright_white().bold()
    );

    if stats.failed + stats.rejected > 0 {
        eprintln!(
            "  Records failed:    {}",
            (stats.failed + stats.rejected).to_string().bright_red().bold()
        );
    }

    eprintln!(
        "  Fields written:    {} ({:.1} per record)",
        stats.fields_written.to_string().bright_white().bold(),
        stats.average_fields()
    );
    eprintln!("  Success rate:      {:.1}%", stats.success_rate());

    for message in stats.error_messages.iter().take(5) {
        eprintln!("  {} {}", "!".bright_red(), message);
    }
}
