//! TOML schema for segmenter rule files

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root rule-file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Rule-set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ellipsis {
    /// Whether a run of two or more dots ends a sentence
    #[serde(default)]
    pub treat_as_boundary: bool,
}

/// Closing enclosures absorbed into the sentence after a terminator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub closers: Vec<char>,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Treat a single capital letter followed by a dot as an initial
    #[serde(default = "default_true")]
    pub initials: bool,
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            initials: true,
            categories: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl SegmenterConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if let Some(ch) = self
            .enclosures
            .closers
            .iter()
            .find(|ch| self.terminators.chars.contains(ch))
        {
            return Err(format!("'{ch}' cannot be both a terminator and a closer"));
        }

        for (category, entries) in &self.abbreviations.categories {
            if entries.iter().any(|abbr| abbr.trim_matches('.').is_empty()) {
                return Err(format!("Empty abbreviation in category '{category}'"));
            }
        }

        Ok(())
    }
}
