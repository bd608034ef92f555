//! Plain text output formatter

use super::{format_value, FryOutcome, OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

const LABEL_WIDTH: usize = 30;

/// Plain text formatter - one aligned block per input
pub struct TextFormatter<W: Write> {
    writer: W,
    precision: usize,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, precision: usize) -> Self {
        Self {
            writer,
            precision,
            reports: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        writeln!(self.writer, "== {} ==", report.source)?;
        for (metric, value) in report.metrics.iter() {
            writeln!(
                self.writer,
                "{:<width$} {:>10}",
                metric.label(),
                format_value(metric, value, self.precision),
                width = LABEL_WIDTH
            )?;
        }

        if !report.interpretations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Interpretation")?;
            for item in &report.interpretations {
                writeln!(
                    self.writer,
                    "  {}: {} ({})",
                    item.scale.metric().label(),
                    item.label,
                    item.description
                )?;
            }
        }

        match &report.fry {
            Some(FryOutcome::Coordinate(coordinate)) => {
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "Fry coordinate: {:.p$} sentences, {:.p$} syllables per 100 words ({} samples)",
                    coordinate.sentences_per_100_words,
                    coordinate.syllables_per_100_words,
                    coordinate.samples,
                    p = self.precision
                )?;
            }
            Some(FryOutcome::Unavailable(reason)) => {
                writeln!(self.writer)?;
                writeln!(self.writer, "Fry coordinate unavailable: {reason}")?;
            }
            None => {}
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_report, SharedBuffer};
    use legible_core::FryCoordinate;

    #[test]
    fn test_text_report() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), 2);
        formatter.format_report(&sample_report(None)).unwrap();
        formatter.finish().unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("== sample.txt ==\n"));
        assert!(out.contains("Words"));
        assert!(out.contains("         9\n"));
        assert!(out.contains("Interpretation\n  Flesch-Kincaid grade: Very easy"));
        assert!(!out.contains("Fry"));
    }

    #[test]
    fn test_text_fry_lines() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), 1);
        let coordinate = FryCoordinate {
            sentences_per_100_words: 6.5,
            syllables_per_100_words: 141.0,
            samples: 3,
        };
        formatter
            .format_report(&sample_report(Some(FryOutcome::Coordinate(coordinate))))
            .unwrap();
        formatter
            .format_report(&sample_report(Some(FryOutcome::Unavailable(
                "too short".to_string(),
            ))))
            .unwrap();

        let out = buffer.contents();
        assert!(out.contains(
            "Fry coordinate: 6.5 sentences, 141.0 syllables per 100 words (3 samples)"
        ));
        assert!(out.contains("Fry coordinate unavailable: too short"));
        assert_eq!(out.matches("== sample.txt ==").count(), 2);
    }
}
