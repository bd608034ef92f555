//! Readability metrics for plain text
//!
//! This crate estimates how hard a text is to read. A single counting pass
//! over regex-level tokens feeds the classic grade formulas (Flesch-Kincaid,
//! Flesch reading ease, SMOG, Coleman-Liau, ARI, Dale-Chall, Gunning fog,
//! Linsear Write, LIX). A Fry sampler averages fixed-size word windows, and
//! an interpreter maps scores onto labelled difficulty bands.
//!
//! The heuristics are deliberately simple and kept stable: the syllable
//! counter only looks at vowel groups and the rough sentence counter adds one
//! to the number of `word[.!?]whitespace` matches. Real sentence boundaries,
//! needed by the Fry sampler, come from an injected [`SentenceSegmenter`].
//!
//! # Example
//!
//! ```rust
//! use legible_core::{Analyzer, Metric, Scale};
//!
//! let analyzer = Analyzer::new();
//! let result = analyzer.analyze_basic("The cat sat on the mat. It was warm.");
//!
//! assert_eq!(result.get(Metric::WordCount), Some(9.0));
//!
//! let grade = result.get(Metric::FleschKincaidGrade).unwrap();
//! let band = analyzer.classify(grade, Scale::FleschKincaidGrade);
//! assert_eq!(band.label, "Very easy");
//! ```

pub mod api;
pub mod cache;
mod error;
pub mod fry;
pub mod interpret;
pub mod metrics;
pub mod segment;
pub mod text;
pub mod wordlist;

pub use api::{Analyzer, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fry::{FryCoordinate, FrySampler, Window};
pub use interpret::{Band, BandTable, Scale};
pub use metrics::{Metric, MetricResult, TextStatistics};
pub use segment::{RuleSegmenter, SentenceSegmenter};
pub use wordlist::{FamiliarWords, WordFamiliarity};

/// Counts, averages and Flesch-Kincaid grade of `text`
pub fn analyze_basic(text: &str) -> MetricResult {
    metrics::analyze_basic(text)
}

/// Every metric of `text`, judging difficult words with `familiarity`
pub fn analyze_composite(text: &str, familiarity: &dyn WordFamiliarity) -> MetricResult {
    metrics::analyze_composite(text, familiarity)
}

/// Classic three-window Fry coordinate of `text`
pub fn fry_coordinate(text: &str, segmenter: &dyn SentenceSegmenter) -> Result<FryCoordinate> {
    fry::fry_coordinate(text, segmenter)
}

/// Band of a built-in scale containing `score`
pub fn classify(score: f64, scale: Scale) -> &'static Band {
    interpret::classify_scale(score, scale)
}
