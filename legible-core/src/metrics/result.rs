//! Named metric values produced by one analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::formulas;
use super::statistics::TextStatistics;

/// Metrics an analysis can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SentenceCount,
    WordCount,
    SyllableCount,
    WordsPerSentence,
    SyllablesPerWord,
    FleschKincaidGrade,
    FleschReadingEase,
    Smog,
    ColemanLiau,
    AutomatedReadabilityIndex,
    DaleChall,
    DifficultWordCount,
    GunningFog,
    LinsearWrite,
    Lix,
}

impl Metric {
    /// Metrics of the basic analysis, in report order
    pub const BASIC: [Metric; 6] = [
        Metric::SentenceCount,
        Metric::WordCount,
        Metric::SyllableCount,
        Metric::WordsPerSentence,
        Metric::SyllablesPerWord,
        Metric::FleschKincaidGrade,
    ];

    /// Every metric, in report order
    pub const ALL: [Metric; 15] = [
        Metric::SentenceCount,
        Metric::WordCount,
        Metric::SyllableCount,
        Metric::WordsPerSentence,
        Metric::SyllablesPerWord,
        Metric::FleschKincaidGrade,
        Metric::FleschReadingEase,
        Metric::Smog,
        Metric::ColemanLiau,
        Metric::AutomatedReadabilityIndex,
        Metric::DaleChall,
        Metric::DifficultWordCount,
        Metric::GunningFog,
        Metric::LinsearWrite,
        Metric::Lix,
    ];

    /// Stable machine-readable key
    pub fn key(&self) -> &'static str {
        match self {
            Metric::SentenceCount => "sentence_count",
            Metric::WordCount => "word_count",
            Metric::SyllableCount => "syllable_count",
            Metric::WordsPerSentence => "words_per_sentence",
            Metric::SyllablesPerWord => "syllables_per_word",
            Metric::FleschKincaidGrade => "flesch_kincaid_grade",
            Metric::FleschReadingEase => "flesch_reading_ease",
            Metric::Smog => "smog",
            Metric::ColemanLiau => "coleman_liau",
            Metric::AutomatedReadabilityIndex => "automated_readability_index",
            Metric::DaleChall => "dale_chall",
            Metric::DifficultWordCount => "difficult_word_count",
            Metric::GunningFog => "gunning_fog",
            Metric::LinsearWrite => "linsear_write",
            Metric::Lix => "lix",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Metric::SentenceCount => "Sentences",
            Metric::WordCount => "Words",
            Metric::SyllableCount => "Syllables",
            Metric::WordsPerSentence => "Words per sentence",
            Metric::SyllablesPerWord => "Syllables per word",
            Metric::FleschKincaidGrade => "Flesch-Kincaid grade",
            Metric::FleschReadingEase => "Flesch reading ease",
            Metric::Smog => "SMOG index",
            Metric::ColemanLiau => "Coleman-Liau index",
            Metric::AutomatedReadabilityIndex => "Automated readability index",
            Metric::DaleChall => "Dale-Chall score",
            Metric::DifficultWordCount => "Difficult words",
            Metric::GunningFog => "Gunning fog index",
            Metric::LinsearWrite => "Linsear Write",
            Metric::Lix => "LIX",
        }
    }

    /// Whether the value is a whole-number count
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Metric::SentenceCount
                | Metric::WordCount
                | Metric::SyllableCount
                | Metric::DifficultWordCount
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable mapping from metric to value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricResult {
    values: BTreeMap<Metric, f64>,
}

impl MetricResult {
    /// Basic metrics from precomputed counts
    pub fn basic(stats: &TextStatistics) -> Self {
        Self {
            values: Metric::BASIC
                .iter()
                .map(|&metric| (metric, value_of(metric, stats)))
                .collect(),
        }
    }

    /// Every metric from precomputed counts
    ///
    /// The familiarity-dependent counts of `stats` must have been filled in.
    pub fn composite(stats: &TextStatistics) -> Self {
        Self {
            values: Metric::ALL
                .iter()
                .map(|&metric| (metric, value_of(metric, stats)))
                .collect(),
        }
    }

    /// Value of `metric`, if this result carries it
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Metrics and values in report order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.values.iter().map(|(&metric, &value)| (metric, value))
    }

    /// Number of metrics carried
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no metric is carried
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn value_of(metric: Metric, stats: &TextStatistics) -> f64 {
    match metric {
        Metric::SentenceCount => stats.sentences as f64,
        Metric::WordCount => stats.words as f64,
        Metric::SyllableCount => stats.syllables as f64,
        Metric::WordsPerSentence => formulas::words_per_sentence(stats),
        Metric::SyllablesPerWord => formulas::syllables_per_word(stats),
        Metric::FleschKincaidGrade => formulas::flesch_kincaid_grade(stats),
        Metric::FleschReadingEase => formulas::flesch_reading_ease(stats),
        Metric::Smog => formulas::smog(stats),
        Metric::ColemanLiau => formulas::coleman_liau(stats),
        Metric::AutomatedReadabilityIndex => formulas::automated_readability_index(stats),
        Metric::DaleChall => formulas::dale_chall(stats),
        Metric::DifficultWordCount => stats.difficult_words as f64,
        Metric::GunningFog => formulas::gunning_fog(stats),
        Metric::LinsearWrite => formulas::linsear_write(stats),
        Metric::Lix => formulas::lix(stats),
    }
}
