use anyhow::Context;
use attributes_to_csv::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Run the selected command on a tokio runtime, stopping on CTRL+C
fn run(args: Args) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => {
                result.context("Command failed")
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to install CTRL+C signal handler")?;
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(attributes_to_csv::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
                .context("Command cancelled")
            }
        }
    })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("attributes-to-csv - Record Attribute CSV Encoder");
    println!("================================================");
    println!();
    println!("Select attributes of flow records and encode them as one RFC 4180 CSV line,");
    println!("stored as CSVData/CSVSchema attributes or as the record body.");
    println!();
    println!("USAGE:");
    println!("    attributes-to-csv <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert JSON-lines records (main command)");
    println!("    split       Print the tokens of a comma-separated, quoted list");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Encode all beach attributes with a header into the record body:");
    println!("    attributes-to-csv convert -i records.jsonl -o out.jsonl \\");
    println!("                              --attribute-regex 'beach-.*' --include-schema \\");
    println!("                              --destination replace-body");
    println!();
    println!("    # Check how a quoted attribute list is read:");
    println!("    attributes-to-csv split '\"beach,name\",uuid'");
    println!();
    println!("For detailed help on any command, use:");
    println!("    attributes-to-csv <COMMAND> --help");
}
