//! Markdown output formatter

use super::{format_value, FryOutcome, OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section with a metric table per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    precision: usize,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, precision: usize) -> Self {
        Self {
            writer,
            precision,
            report_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.report_count += 1;

        writeln!(self.writer, "## {}", report.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|------:|")?;
        for (metric, value) in report.metrics.iter() {
            writeln!(
                self.writer,
                "| {} | {} |",
                metric.label(),
                format_value(metric, value, self.precision)
            )?;
        }
        writeln!(self.writer)?;

        for item in &report.interpretations {
            writeln!(
                self.writer,
                "- **{}:** {} ({})",
                item.scale.metric().label(),
                item.label,
                item.description
            )?;
        }

        match &report.fry {
            Some(FryOutcome::Coordinate(coordinate)) => writeln!(
                self.writer,
                "- **Fry coordinate:** {:.p$} sentences, {:.p$} syllables per 100 words",
                coordinate.sentences_per_100_words,
                coordinate.syllables_per_100_words,
                p = self.precision
            )?,
            Some(FryOutcome::Unavailable(reason)) => {
                writeln!(self.writer, "- **Fry coordinate:** unavailable ({reason})")?
            }
            None => {}
        }
        writeln!(self.writer)?;

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Inputs analyzed: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
