//! Output formatting module

use anyhow::Result;
use legible_core::{Band, FryCoordinate, Metric, MetricResult, Scale};
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Everything computed for one input
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Input label (file path or `<stdin>`)
    pub source: String,
    pub metrics: MetricResult,
    pub interpretations: Vec<Interpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fry: Option<FryOutcome>,
}

/// Band a score falls into
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub scale: Scale,
    pub score: f64,
    pub label: String,
    pub description: String,
}

impl Interpretation {
    pub fn new(scale: Scale, score: f64, band: &Band) -> Self {
        Self {
            scale,
            score,
            label: band.label.to_string(),
            description: band.description.to_string(),
        }
    }
}

/// Fry coordinate, or why it could not be computed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FryOutcome {
    Coordinate(FryCoordinate),
    Unavailable(String),
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report of one input
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text report
    Text,
    /// JSON array of reports
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Aligned plain-text report",
            OutputFormat::Json => "JSON array of reports",
            OutputFormat::Markdown => "Markdown tables",
        }
    }
}

/// Boxed formatter writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    precision: usize,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, precision)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, precision)),
    }
}

/// Counts print as integers, scores with `precision` decimals
pub(crate) fn format_value(metric: Metric, value: f64, precision: usize) -> String {
    if metric.is_count() {
        format!("{value:.0}")
    } else {
        format!("{value:.precision$}")
    }
}
