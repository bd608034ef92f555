//! Rule-driven sentence segmenter
//!
//! Bridges a [`SegmenterConfig`] and the [`SentenceSegmenter`] contract. A
//! run of terminator characters becomes a boundary unless it is a decimal
//! point, an ellipsis (when configured so), an abbreviation or an initial.
//! Closing quotes and brackets right after the run stay with the sentence,
//! and the boundary must be followed by whitespace or the end of the text.

use std::path::Path;

use super::config::SegmenterConfig;
use super::tables::{DotRole, DotTable, TermTable, Trie};
use super::SentenceSegmenter;
use crate::error::{Error, Result};

/// Configurable rule-based segmenter
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    code: String,
    name: String,

    term_table: TermTable,
    dot_table: DotTable,
    abbreviations: Trie,
    closers: Vec<char>,
    ellipsis_is_boundary: bool,
    initials: bool,
}

/// A maximal run of terminator characters
struct TerminatorRun {
    /// Byte offset of the first terminator
    start: usize,
    /// Byte offset one past the last terminator
    end: usize,
    first: char,
    len: usize,
    dots: usize,
}

impl RuleSegmenter {
    /// Create from a validated configuration
    pub fn from_config(config: &SegmenterConfig) -> Result<Self> {
        config.validate().map_err(Error::Configuration)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            term_table: TermTable::new(&config.terminators.chars),
            dot_table: DotTable,
            abbreviations: Trie::from_categories(&config.abbreviations.categories, false),
            closers: config.enclosures.closers.clone(),
            ellipsis_is_boundary: config.ellipsis.treat_as_boundary,
            initials: config.abbreviations.initials,
        })
    }

    /// Parse a TOML rule file held in memory
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SegmenterConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }

    /// Load a TOML rule file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let rules = Self::from_toml_str(&source)?;
        log::debug!(
            "Loaded segmenter rules '{}' from {}",
            rules.code,
            path.display()
        );
        Ok(rules)
    }

    /// Rule-set code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable rule-set name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn is_boundary(
        &self,
        text: &str,
        run: &TerminatorRun,
        prev: Option<char>,
        next: Option<char>,
    ) -> bool {
        if run.dots >= 2 && run.dots == run.len {
            return self.ellipsis_is_boundary;
        }

        if run.len > 1 || run.first != '.' {
            return true;
        }

        match self.dot_table.classify(prev, next) {
            DotRole::DecimalDot => false,
            DotRole::EllipsisTail => self.ellipsis_is_boundary,
            DotRole::Ordinary => {
                if self.abbreviations.find_abbrev(text, run.end) {
                    return false;
                }
                !(self.initials && self.is_initial(text, run.start))
            }
        }
    }

    /// Single capital letter standing alone before the dot at `dot_pos`
    fn is_initial(&self, text: &str, dot_pos: usize) -> bool {
        let mut before = text[..dot_pos].chars().rev();
        match (before.next(), before.next()) {
            // `I` is far more often the pronoun than an initial
            (Some('I'), _) => false,
            (Some(letter), None) => letter.is_uppercase(),
            (Some(letter), Some(preceding)) => {
                letter.is_uppercase() && !preceding.is_alphanumeric()
            }
            _ => false,
        }
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0;
        let mut prev: Option<char> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if !self.term_table.is_terminator(ch) {
                prev = Some(ch);
                continue;
            }

            let mut run = TerminatorRun {
                start: pos,
                end: pos + ch.len_utf8(),
                first: ch,
                len: 1,
                dots: usize::from(ch == '.'),
            };
            let before_run = prev;
            prev = Some(ch);
            while let Some(&(next_pos, next_ch)) = chars.peek() {
                if !self.term_table.is_terminator(next_ch) {
                    break;
                }
                run.end = next_pos + next_ch.len_utf8();
                run.len += 1;
                run.dots += usize::from(next_ch == '.');
                prev = Some(next_ch);
                chars.next();
            }

            let next = chars.peek().map(|&(_, c)| c);
            if !self.is_boundary(text, &run, before_run, next) {
                continue;
            }

            let mut end = run.end;
            while let Some(&(closer_pos, closer)) = chars.peek() {
                if !self.closers.contains(&closer) {
                    break;
                }
                end = closer_pos + closer.len_utf8();
                prev = Some(closer);
                chars.next();
            }

            if matches!(chars.peek(), Some(&(_, c)) if !c.is_whitespace()) {
                continue;
            }

            let sentence = text[sentence_start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            sentence_start = end;
        }

        let rest = text[sentence_start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = r#"
[metadata]
code = "test"
name = "Test rules"

[terminators]
chars = [".", "!", "?"]

[enclosures]
closers = ['"', ")"]

[abbreviations]
titles = ["Dr", "Mr"]
places = ["U.S"]
"#;

    fn segmenter() -> RuleSegmenter {
        RuleSegmenter::from_toml_str(RULES).unwrap()
    }

    #[test]
    fn test_metadata() {
        let rules = segmenter();
        assert_eq!(rules.code(), "test");
        assert_eq!(rules.name(), "Test rules");
    }

    #[test]
    fn test_simple_sentences() {
        let sentences = segmenter().segment_sentences("Hello world. This is a test! Is it?");
        assert_eq!(sentences, vec!["Hello world.", "This is a test!", "Is it?"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(segmenter().segment_sentences("").is_empty());
        assert!(segmenter().segment_sentences("  \n ").is_empty());
    }

    #[test]
    fn test_trailing_fragment_kept() {
        let sentences = segmenter().segment_sentences("One. Two without end");
        assert_eq!(sentences, vec!["One.", "Two without end"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences =
            segmenter().segment_sentences("Dr. Smith lives in the U.S. now. He likes it.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith lives in the U.S. now.", "He likes it."]
        );
    }

    #[test]
    fn test_decimal_does_not_split() {
        let sentences = segmenter().segment_sentences("Pi is 3.14 or so. Right.");
        assert_eq!(sentences, vec!["Pi is 3.14 or so.", "Right."]);
    }

    #[test]
    fn test_ellipsis_not_boundary_by_default() {
        let sentences = segmenter().segment_sentences("Well... I suppose so. Fine.");
        assert_eq!(sentences, vec!["Well... I suppose so.", "Fine."]);
    }

    #[test]
    fn test_ellipsis_boundary_when_configured() {
        let source = format!("{RULES}\n[ellipsis]\ntreat_as_boundary = true\n");
        let rules = RuleSegmenter::from_toml_str(&source).unwrap();
        let sentences = rules.segment_sentences("Well... I suppose so.");
        assert_eq!(sentences, vec!["Well...", "I suppose so."]);
    }

    #[test]
    fn test_mixed_terminator_run() {
        let sentences = segmenter().segment_sentences("Really?! Yes.");
        assert_eq!(sentences, vec!["Really?!", "Yes."]);
    }

    #[test]
    fn test_closers_absorbed() {
        let sentences =
            segmenter().segment_sentences("He said \"Stop.\" Then he left. (It rained.) End.");
        assert_eq!(
            sentences,
            vec!["He said \"Stop.\"", "Then he left.", "(It rained.)", "End."]
        );
    }

    #[test]
    fn test_initials() {
        let sentences = segmenter().segment_sentences("J. R. R. Tolkien wrote it. So did I. Done.");
        assert_eq!(
            sentences,
            vec!["J. R. R. Tolkien wrote it.", "So did I.", "Done."]
        );
    }

    #[test]
    fn test_no_whitespace_after_terminator() {
        let sentences = segmenter().segment_sentences("Visit example.com today. Thanks.");
        assert_eq!(sentences, vec!["Visit example.com today.", "Thanks."]);
    }

    #[test]
    fn test_multibyte_text() {
        let sentences = segmenter().segment_sentences("Ça va? Très bien. Merci!");
        assert_eq!(sentences, vec!["Ça va?", "Très bien.", "Merci!"]);
    }

    #[test]
    fn test_count_sentences_default_method() {
        assert_eq!(segmenter().count_sentences("A b. C d. E f."), 3);
    }

    #[test]
    fn test_invalid_toml() {
        let result = RuleSegmenter::from_toml_str("not = [valid");
        assert!(matches!(result, Err(Error::RuleParse(_))));
    }

    #[test]
    fn test_invalid_config() {
        let source = RULES.replace(r#"[".", "!", "?"]"#, "[]");
        let result = RuleSegmenter::from_toml_str(&source);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
