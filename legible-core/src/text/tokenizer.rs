//! Regex-level word and sentence heuristics
//!
//! Nothing here parses language. Words are maximal runs of word characters
//! and sentences are counted from a punctuation pattern, which over- and
//! undercounts in well-known ways (abbreviations, ellipses, decimals, a
//! final sentence without trailing whitespace). The behavior is kept stable
//! because every downstream grade depends on it.

use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
static SENTENCE_END_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

fn sentence_end_pattern() -> &'static Regex {
    SENTENCE_END_PATTERN
        .get_or_init(|| Regex::new(r"\w+[.!?]\s").expect("sentence pattern is valid"))
}

/// A word token with its position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token exactly as it appears in the source
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
}

impl<'a> Token<'a> {
    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Lower-cased form used for counting and lookups
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Count maximal word-character runs
pub fn count_words(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// Rough sentence count
///
/// Counts `word[.!?]whitespace` occurrences and adds one for a trailing
/// sentence without that pattern. The result is never zero; empty text
/// yields 1.
pub fn count_sentences(text: &str) -> usize {
    sentence_end_pattern().find_iter(text).count() + 1
}

/// Lower-cased word tokens in document order
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Word tokens with byte offsets into `text`
pub fn word_tokens(text: &str) -> Vec<Token<'_>> {
    word_pattern()
        .find_iter(text)
        .map(|m| Token {
            text: m.as_str(),
            start: m.start(),
        })
        .collect()
}
