//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod classify;
pub mod list;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute readability metrics for text files
    Analyze(analyze::AnalyzeArgs),

    /// Map a score onto the bands of a scale
    Classify(classify::ClassifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
