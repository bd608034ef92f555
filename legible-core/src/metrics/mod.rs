//! Metric calculation
//!
//! One counting pass produces [`TextStatistics`]; the published formulas in
//! [`formulas`] turn those counts into a [`MetricResult`].

pub mod formulas;
mod result;
mod statistics;

pub use result::{Metric, MetricResult};
pub use statistics::{
    TextStatistics, DIFFICULT_WORD_MIN_SYLLABLES, LONG_WORD_CHARS, POLYSYLLABLE_MIN,
};

use crate::wordlist::WordFamiliarity;

/// Counts, averages and Flesch-Kincaid grade of `text`
pub fn analyze_basic(text: &str) -> MetricResult {
    MetricResult::basic(&TextStatistics::from_text(text))
}

/// Every metric of `text`, judging difficult words with `familiarity`
pub fn analyze_composite(text: &str, familiarity: &dyn WordFamiliarity) -> MetricResult {
    MetricResult::composite(&TextStatistics::with_familiarity(text, familiarity))
}
