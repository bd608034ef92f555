//! Fry-style sampling
//!
//! The text is cut into consecutive windows of exactly `window_size` words
//! and the first `samples` windows are measured. Sentences in a window come
//! from the injected [`SentenceSegmenter`], syllables from the heuristic
//! counter. The mean of the window counts, normalised to 100 words, is the
//! point plotted on a Fry graph.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::segment::SentenceSegmenter;
use crate::text::{count_syllables, word_tokens, Token};

/// Words per window in the classic procedure
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Windows averaged in the classic procedure
pub const DEFAULT_SAMPLES: usize = 3;

/// A block of consecutive words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a> {
    /// Zero-based position among the windows of the text
    pub index: usize,
    pub tokens: Vec<Token<'a>>,
    /// Source text from the first token up to the start of the next window
    pub text: &'a str,
}

impl Window<'_> {
    /// Number of words in the window
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Heuristic syllable total of the window's words
    pub fn syllables(&self) -> usize {
        self.tokens
            .iter()
            .map(|token| count_syllables(&token.normalized()))
            .sum()
    }
}

/// Complete windows of `size` words; the trailing partial block is dropped
pub fn windows(text: &str, size: usize) -> Vec<Window<'_>> {
    split_windows(text, &word_tokens(text), size)
}

fn split_windows<'a>(text: &'a str, tokens: &[Token<'a>], size: usize) -> Vec<Window<'a>> {
    if size == 0 {
        return Vec::new();
    }

    (0..tokens.len() / size)
        .map(|index| {
            let block = &tokens[index * size..(index + 1) * size];
            let start = block[0].start;
            let end = tokens
                .get((index + 1) * size)
                .map_or(text.len(), |next| next.start);

            Window {
                index,
                tokens: block.to_vec(),
                text: &text[start..end],
            }
        })
        .collect()
}

/// Mean sentence and syllable counts per 100 words
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FryCoordinate {
    pub sentences_per_100_words: f64,
    pub syllables_per_100_words: f64,
    /// Windows averaged
    pub samples: usize,
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrySampler {
    window_size: usize,
    samples: usize,
}

impl Default for FrySampler {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl FrySampler {
    /// Sampler with custom parameters; both must be positive
    pub fn new(window_size: usize, samples: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::Configuration(
                "window_size must be greater than 0".to_string(),
            ));
        }
        if samples == 0 {
            return Err(Error::Configuration(
                "samples must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            window_size,
            samples,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Fewest words the procedure accepts
    pub fn required_words(&self) -> usize {
        self.window_size * self.samples
    }

    /// Sample `text` and average the first windows
    ///
    /// Windows past the configured sample count are ignored. Each window's
    /// text is segmented on its own, so a sentence that straddles a window
    /// boundary counts once in every window it touches.
    pub fn coordinate(
        &self,
        text: &str,
        segmenter: &dyn SentenceSegmenter,
    ) -> Result<FryCoordinate> {
        let tokens = word_tokens(text);
        if tokens.len() < self.required_words() {
            return Err(Error::InsufficientInput {
                required: self.required_words(),
                found: tokens.len(),
            });
        }
        let windows = split_windows(text, &tokens, self.window_size);

        let mut sentences = 0usize;
        let mut syllables = 0usize;
        for window in windows.iter().take(self.samples) {
            let window_sentences = segmenter.count_sentences(window.text);
            let window_syllables = window.syllables();
            log::trace!(
                "Fry window {}: {} sentences, {} syllables",
                window.index,
                window_sentences,
                window_syllables
            );
            sentences += window_sentences;
            syllables += window_syllables;
        }

        if windows.len() > self.samples {
            log::debug!(
                "Fry sampling ignored {} of {} windows",
                windows.len() - self.samples,
                windows.len()
            );
        }

        // mean per window, scaled to 100 words
        let sampled_words = self.required_words() as f64;
        Ok(FryCoordinate {
            sentences_per_100_words: sentences as f64 * 100.0 / sampled_words,
            syllables_per_100_words: syllables as f64 * 100.0 / sampled_words,
            samples: self.samples,
        })
    }
}

/// Classic three-window Fry coordinate of `text`
pub fn fry_coordinate(text: &str, segmenter: &dyn SentenceSegmenter) -> Result<FryCoordinate> {
    FrySampler::default().coordinate(text, segmenter)
}
