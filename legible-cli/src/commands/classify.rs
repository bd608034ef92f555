//! Classify command implementation

use anyhow::Result;
use clap::Args;
use legible_core::{Band, Scale};
use std::io::{self, Write};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Scale to interpret the score on (see `legible list scales`)
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Scale,

    /// Score to classify
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

fn parse_scale(name: &str) -> Result<Scale, String> {
    name.parse().map_err(|e: legible_core::Error| e.to_string())
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        let band = legible_core::classify(self.score, self.scale);
        let mut stdout = io::stdout().lock();
        write_band(&mut stdout, self.scale, self.score, band)?;
        stdout.flush()?;
        Ok(())
    }
}

fn write_band<W: Write>(writer: &mut W, scale: Scale, score: f64, band: &Band) -> Result<()> {
    writeln!(writer, "{} {}: {}", scale, score, band.label)?;
    writeln!(writer, "{}", band.description)?;
    writeln!(writer, "Range: {}", describe_range(band))?;
    Ok(())
}

fn describe_range(band: &Band) -> String {
    match (band.lower.is_finite(), band.upper.is_finite()) {
        (false, true) => format!("below {}", band.upper),
        (true, false) => format!("{} and above", band.lower),
        (true, true) => format!("{} to below {}", band.lower, band.upper),
        (false, false) => "any score".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("fk").unwrap(), Scale::FleschKincaidGrade);
        assert!(parse_scale("nope").unwrap_err().contains("Unknown scale"));
    }

    #[test]
    fn test_write_band() {
        let band = legible_core::classify(9.91, Scale::FleschKincaidGrade);
        let mut out = Vec::new();
        write_band(&mut out, Scale::FleschKincaidGrade, 9.91, band).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("flesch-kincaid-grade 9.91: Easy\n"));
        assert!(out.contains("Range: 6 to below 10"));
    }

    #[test]
    fn test_open_ranges() {
        let bands = Scale::FleschReadingEase.table().bands();
        assert_eq!(describe_range(&bands[0]), "below 30");
        assert_eq!(describe_range(&bands[bands.len() - 1]), "90 and above");
    }
}
