//! List command implementation

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use legible_core::{Metric, Scale};
use std::io::{self, Write};

use crate::output::OutputFormat;

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List interpretation scales and their bands
    Scales,

    /// List reported metrics
    Metrics,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            ListCommands::Scales => {
                writeln!(writer, "Available scales:")?;
                for scale in Scale::ALL {
                    writeln!(writer, "  {:<22} (alias: {})", scale.name(), scale.alias())?;
                    for band in scale.table().bands() {
                        writeln!(writer, "    {:<18} {}", band.label, band.description)?;
                    }
                }
            }
            ListCommands::Metrics => {
                writeln!(writer, "Available metrics:")?;
                for metric in Metric::ALL {
                    let note = if Metric::BASIC.contains(&metric) {
                        ""
                    } else {
                        " [composite]"
                    };
                    writeln!(writer, "  {:<30} {}{}", metric.key(), metric.label(), note)?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        writeln!(writer, "  {:<10} {}", value.get_name(), format.description())?;
                    }
                }
            }
        }
        Ok(())
    }
}
