//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use legible_core::text::strip_markdown;
use legible_core::{Analyzer, FamiliarWords, Metric, RuleSegmenter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{create_formatter, FryOutcome, Interpretation, OutputFormat, Report};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's choice]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report every published index, not just the basic metrics
    #[arg(long)]
    pub composite: bool,

    /// Compute the Fry coordinate (needs at least 300 words)
    #[arg(long)]
    pub fry: bool,

    /// Remove Markdown markers before analysis
    #[arg(long)]
    pub strip_markdown: bool,

    /// Familiar-word list, one word per line
    #[arg(long, value_name = "FILE")]
    pub familiar_words: Option<PathBuf>,

    /// Segmenter rule file (TOML) used for Fry sampling
    #[arg(long, value_name = "FILE")]
    pub segmenter_rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Flags merged with the configuration file
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    composite: bool,
    fry: bool,
    strip_markdown: bool,
    format: OutputFormat,
    precision: usize,
    threads: usize,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting readability analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&config)?;
        let analyzer = self.build_analyzer()?;
        let sources = resolve_inputs(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(sources.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build()
            .context("Failed to build worker pool")?;

        let outcomes: Vec<(String, Result<Report>)> = pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let label = source.to_string();
                    let outcome = analyze_source(&analyzer, source, &settings);
                    progress.input_completed(&label, outcome.is_ok());
                    (label, outcome)
                })
                .collect()
        });
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(settings.format, writer, settings.precision);

        let total = outcomes.len();
        let mut failed = 0;
        for (label, outcome) in outcomes {
            match outcome {
                Ok(report) => formatter.format_report(&report)?,
                Err(e) => {
                    failed += 1;
                    eprintln!("Error: {label}: {e:#}");
                }
            }
        }
        formatter.finish()?;

        log::info!("Analyzed {} of {} inputs", total - failed, total);
        if failed > 0 {
            return Err(CliError::InputsFailed { failed, total }.into());
        }
        Ok(())
    }

    fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => {
                <OutputFormat as clap::ValueEnum>::from_str(&config.output.default_format, true)
                    .map_err(|_| {
                        CliError::ConfigError(format!(
                            "unknown output format '{}'",
                            config.output.default_format
                        ))
                    })?
            }
        };

        let threads = match self.threads {
            Some(0) => {
                return Err(CliError::ConfigError("threads must be greater than 0".into()).into())
            }
            Some(n) => n,
            None if config.performance.worker_threads > 0 => config.performance.worker_threads,
            None => num_cpus::get(),
        };

        Ok(Settings {
            composite: self.composite || config.analysis.composite,
            fry: self.fry || config.analysis.fry,
            strip_markdown: self.strip_markdown || config.analysis.strip_markdown,
            format,
            precision: config.output.precision,
            threads,
        })
    }

    fn build_analyzer(&self) -> Result<Analyzer> {
        let mut analyzer = Analyzer::new();

        if let Some(path) = &self.segmenter_rules {
            let rules = RuleSegmenter::from_file(path)
                .with_context(|| format!("Failed to load segmenter rules: {}", path.display()))?;
            log::info!("Using segmenter rules '{}' ({})", rules.code(), rules.name());
            analyzer = analyzer.with_segmenter(Arc::new(rules));
        }

        if let Some(path) = &self.familiar_words {
            let words = FamiliarWords::from_file(path)
                .with_context(|| format!("Failed to load familiar words: {}", path.display()))?;
            log::info!("Using {} familiar words from {}", words.len(), path.display());
            analyzer = analyzer.with_word_list(Arc::new(words));
        }

        Ok(analyzer)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn analyze_source(
    analyzer: &Analyzer,
    source: &InputSource,
    settings: &Settings,
) -> Result<Report> {
    let raw = source.read()?;
    let text = if settings.strip_markdown {
        strip_markdown(&raw)
    } else {
        raw
    };
    Ok(build_report(analyzer, source.to_string(), &text, settings))
}

fn build_report(analyzer: &Analyzer, source: String, text: &str, settings: &Settings) -> Report {
    let metrics = if settings.composite {
        analyzer.analyze_composite(text)
    } else {
        analyzer.analyze_basic(text)
    };
    if metrics.get(Metric::WordCount) == Some(0.0) {
        log::warn!("{source}: input contains no words");
    }

    let interpretations = analyzer
        .interpret(&metrics)
        .into_iter()
        .map(|(scale, score, band)| Interpretation::new(scale, score, band))
        .collect();

    let fry = settings.fry.then(|| match analyzer.fry_coordinate(text) {
        Ok(coordinate) => FryOutcome::Coordinate(coordinate),
        Err(e) => {
            log::debug!("{source}: {e}");
            FryOutcome::Unavailable(e.to_string())
        }
    });

    Report {
        source,
        metrics,
        interpretations,
        fry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            composite: false,
            fry: false,
            strip_markdown: false,
            familiar_words: None,
            segmenter_rules: None,
            config: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn settings(composite: bool, fry: bool) -> Settings {
        Settings {
            composite,
            fry,
            strip_markdown: false,
            format: OutputFormat::Text,
            precision: 2,
            threads: 1,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.analysis.fry = true;
        config.output.default_format = "markdown".to_string();
        config.performance.worker_threads = 3;

        let settings = args().settings(&config).unwrap();
        assert!(settings.fry);
        assert!(!settings.composite);
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.threads, 3);

        let mut explicit = args();
        explicit.format = Some(OutputFormat::Json);
        explicit.threads = Some(1);
        explicit.composite = true;
        let settings = explicit.settings(&config).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, 1);
        assert!(settings.composite);
    }

    #[test]
    fn test_bad_config_format() {
        let mut config = CliConfig::default();
        config.output.default_format = "yaml".to_string();
        let err = args().settings(&config).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut zero = args();
        zero.threads = Some(0);
        assert!(zero.settings(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_basic_report() {
        let analyzer = Analyzer::new();
        let report = build_report(
            &analyzer,
            "x".to_string(),
            "The cat sat. ",
            &settings(false, false),
        );
        assert_eq!(report.metrics.len(), Metric::BASIC.len());
        assert_eq!(report.interpretations.len(), 1);
        assert!(report.fry.is_none());
    }

    #[test]
    fn test_blank_text_still_reports() {
        let analyzer = Analyzer::new();
        let report = build_report(&analyzer, "x".to_string(), " \n", &settings(false, false));
        assert_eq!(report.metrics.get(Metric::WordCount), Some(0.0));
        assert_eq!(report.metrics.get(Metric::SentenceCount), Some(1.0));
    }

    #[test]
    fn test_composite_report_with_fry() {
        let analyzer = Analyzer::new();
        let report = build_report(
            &analyzer,
            "x".to_string(),
            "The cat sat. ",
            &settings(true, true),
        );
        assert_eq!(report.metrics.len(), Metric::ALL.len());
        assert_eq!(report.interpretations.len(), 3);
        assert!(matches!(report.fry, Some(FryOutcome::Unavailable(ref m)) if m.contains("300")));
    }
}
