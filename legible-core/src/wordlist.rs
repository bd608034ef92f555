//! Familiar-word lists for difficult-word detection
//!
//! Dale-Chall and Gunning Fog need to know which words a reader already
//! knows. That knowledge is injected through [`WordFamiliarity`]; the
//! embedded [`FamiliarWords::embedded`] list is a compact default and a full
//! Dale-Chall list can be loaded from a file instead.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

/// Decides whether a lower-case word counts as familiar
pub trait WordFamiliarity: Send + Sync {
    /// `word` is a lower-case token
    fn is_familiar(&self, word: &str) -> bool;
}

impl<T: WordFamiliarity + ?Sized> WordFamiliarity for &T {
    fn is_familiar(&self, word: &str) -> bool {
        (**self).is_familiar(word)
    }
}

/// Set of familiar words
#[derive(Debug, Clone, Default)]
pub struct FamiliarWords {
    words: HashSet<String>,
}

static EMBEDDED: OnceLock<FamiliarWords> = OnceLock::new();

const EMBEDDED_LIST: &str = include_str!("../configs/wordlists/familiar_words.txt");

impl FamiliarWords {
    /// Build from an iterator of words (lower-cased on insert)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse a list with one word per line
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(source: &str) -> Self {
        Self::from_words(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Read a list from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::parse(&source))
    }

    /// Load a list from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let list = Self::parse(&std::fs::read_to_string(path)?);
        log::debug!(
            "Loaded {} familiar words from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Process-wide default list of common English words
    pub fn embedded() -> &'static FamiliarWords {
        EMBEDDED.get_or_init(|| Self::parse(EMBEDDED_LIST))
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Does the list contain `word`?
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl WordFamiliarity for FamiliarWords {
    fn is_familiar(&self, word: &str) -> bool {
        self.contains(word)
    }
}
