//! Command-line entry point for legible

use clap::Parser;
use legible_cli::commands::Commands;
use std::process::ExitCode;

/// Readability metrics for plain text
#[derive(Debug, Parser)]
#[command(name = "legible", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
