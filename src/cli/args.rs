//! Command-line argument definitions for attributes-to-csv
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::services::attribute_selector::Destination;
use crate::constants::MAX_WORKERS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the attribute-to-CSV converter
///
/// Selects attributes of JSON-lines flow records and encodes them as a
/// single CSV line, stored as new attributes or as the record body.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "attributes-to-csv",
    version,
    about = "Encode selected record attributes as RFC 4180 CSV lines",
    long_about = "Reads flow records as JSON lines, selects attributes by pattern, explicit \
                  list or default-all, appends the core identity attributes, and writes the \
                  encoded CSV either into CSVData/CSVSchema attributes or into the record body."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert JSON-lines records, writing CSV to attributes or body
    Convert(ConvertArgs),
    /// Print the tokens of a comma-separated, optionally quoted list
    Split(SplitArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input file of JSON-lines records
    ///
    /// Each line holds `{"attributes": {...}, "content": "..."}`. Attribute
    /// order is preserved. Reads stdin when not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input file of JSON-lines records (default: stdin)"
    )]
    pub input_path: Option<PathBuf>,

    /// Output file for converted records
    ///
    /// Converted records are written as JSON lines in input order.
    /// Writes to stdout when not specified.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for converted records (default: stdout)"
    )]
    pub output_path: Option<PathBuf>,

    /// Output file for records routed to failure
    ///
    /// Receives failed records and input lines that could not be decoded,
    /// verbatim. Failures are only counted when not specified.
    #[arg(
        long = "failure",
        value_name = "FILE",
        help = "Output file for failed records and malformed input lines"
    )]
    pub failure_path: Option<PathBuf>,

    /// Explicit attribute list
    ///
    /// Comma-separated; names containing commas may be wrapped in double
    /// quotes, e.g. "beach,name",uuid
    #[arg(
        short = 'l',
        long = "attribute-list",
        value_name = "LIST",
        help = "Comma-separated attribute names to encode"
    )]
    pub attribute_list: Option<String>,

    /// Attribute name pattern
    ///
    /// Regular expression that must match the whole attribute name.
    /// Matches come before listed names in the output.
    #[arg(
        short = 'r',
        long = "attribute-regex",
        value_name = "REGEX",
        help = "Regular expression matching whole attribute names"
    )]
    pub attribute_regex: Option<String>,

    /// Where the CSV output is delivered
    #[arg(
        short = 'd',
        long = "destination",
        value_enum,
        help = "Deliver CSV as new attributes or as the record body"
    )]
    pub destination: Option<DestinationArg>,

    /// Leave out the core identity attributes
    ///
    /// By default `path`, `filename` and `uuid` are appended after the
    /// selected attributes.
    #[arg(
        long = "no-core-attributes",
        help = "Do not append path, filename and uuid"
    )]
    pub exclude_core_attributes: bool,

    /// Produce a header line naming the selected attributes
    #[arg(long = "include-schema", help = "Produce a CSV header line")]
    pub include_schema: bool,

    /// Emit `null` for missing attributes
    #[arg(
        long = "null-value",
        help = "Write null instead of an empty field for missing attributes"
    )]
    pub null_value: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/attributes-to-csv/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of parallel workers
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers for conversion"
    )]
    pub workers: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the split command
#[derive(Debug, Clone, Parser)]
pub struct SplitArgs {
    /// List to split
    #[arg(value_name = "LIST", help = "Comma-separated, optionally quoted list")]
    pub list: String,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Destination choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DestinationArg {
    /// Store lines as CSVData / CSVSchema attributes
    NewField,
    /// Replace the record body
    ReplaceBody,
}

impl From<DestinationArg> for Destination {
    fn from(arg: DestinationArg) -> Self {
        match arg {
            DestinationArg::NewField => Destination::NewField,
            DestinationArg::ReplaceBody => Destination::ReplaceBody,
        }
    }
}

impl Args {
    /// Determine the log level of whichever command was given
    pub fn get_log_level(&self) -> &'static str {
        match &self.command {
            Some(Commands::Convert(args)) => args.get_log_level(),
            Some(Commands::Split(args)) => verbosity_level(args.verbose),
            None => "warn",
        }
    }

    /// Whether quiet mode was requested
    pub fn is_quiet(&self) -> bool {
        matches!(&self.command, Some(Commands::Convert(args)) if args.quiet)
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }
        }

        for output_path in [&self.output_path, &self.failure_path].into_iter().flatten() {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0",
                ));
            }

            if workers > MAX_WORKERS {
                return Err(Error::configuration(format!(
                    "Number of workers cannot exceed {}",
                    MAX_WORKERS
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
