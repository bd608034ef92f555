//! Sentence segmentation
//!
//! The Fry sampler needs real sentence boundaries rather than the rough
//! punctuation count used by the basic metrics. Segmentation is a capability
//! injected through [`SentenceSegmenter`], so callers can plug in another
//! backend or a stub. [`RuleSegmenter`] is the built-in implementation,
//! driven by TOML rule files.

pub mod config;
mod loader;
mod rules;
pub(crate) mod tables;

pub use config::SegmenterConfig;
pub use loader::{available_rules, get_rules};
pub use rules::RuleSegmenter;

/// Splits text into sentences
pub trait SentenceSegmenter: Send + Sync {
    /// Trimmed, non-empty sentences of `text` in document order
    fn segment_sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of sentences in `text`
    fn count_sentences(&self, text: &str) -> usize {
        self.segment_sentences(text).len()
    }
}
