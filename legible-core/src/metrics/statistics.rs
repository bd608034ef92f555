//! Surface counts gathered in one pass over the tokens

use serde::{Deserialize, Serialize};

use crate::text::{count_sentences, count_syllables, word_tokens};
use crate::wordlist::WordFamiliarity;

/// Words longer than this many characters count as long (LIX)
pub const LONG_WORD_CHARS: usize = 6;

/// Words with at least this many syllables are polysyllabic
pub const POLYSYLLABLE_MIN: usize = 3;

/// Unfamiliar words with at least this many syllables are difficult (Dale-Chall)
pub const DIFFICULT_WORD_MIN_SYLLABLES: usize = 2;

/// Counts every formula is computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Rough sentence count (never zero for analysed text)
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    /// Alphanumeric characters inside words
    pub characters: usize,
    /// Alphabetic characters inside words
    pub letters: usize,
    /// Words with three or more syllables
    pub polysyllables: usize,
    /// Words longer than six characters
    pub long_words: usize,
    /// Unfamiliar polysyllables (Gunning Fog)
    pub complex_words: usize,
    /// Unfamiliar words of two or more syllables (Dale-Chall)
    pub difficult_words: usize,
}

impl TextStatistics {
    /// Counts that need no word list
    pub fn from_text(text: &str) -> Self {
        Self::collect(text, None)
    }

    /// All counts, using `familiarity` for the difficult-word counts
    pub fn with_familiarity(text: &str, familiarity: &dyn WordFamiliarity) -> Self {
        Self::collect(text, Some(familiarity))
    }

    fn collect(text: &str, familiarity: Option<&dyn WordFamiliarity>) -> Self {
        let mut stats = Self {
            sentences: count_sentences(text),
            ..Self::default()
        };

        for token in word_tokens(text) {
            let word = token.normalized();
            let syllables = count_syllables(&word);

            stats.words += 1;
            stats.syllables += syllables;
            stats.characters += word.chars().filter(|c| c.is_alphanumeric()).count();
            stats.letters += word.chars().filter(|c| c.is_alphabetic()).count();
            if word.chars().count() > LONG_WORD_CHARS {
                stats.long_words += 1;
            }
            if syllables >= POLYSYLLABLE_MIN {
                stats.polysyllables += 1;
            }

            if let Some(familiarity) = familiarity {
                if !familiarity.is_familiar(&word) {
                    if syllables >= DIFFICULT_WORD_MIN_SYLLABLES {
                        stats.difficult_words += 1;
                    }
                    if syllables >= POLYSYLLABLE_MIN {
                        stats.complex_words += 1;
                    }
                }
            }
        }

        stats
    }

    /// Words with fewer than three syllables (Linsear Write)
    pub fn easy_words(&self) -> usize {
        self.words.saturating_sub(self.polysyllables)
    }

    /// True when the text contained no words
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
