//! Embedded segmenter rule sets
//!
//! Rule files compiled into the binary are parsed once per process and
//! shared afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::rules::RuleSegmenter;
use crate::error::{Error, Result};

static EMBEDDED: OnceLock<HashMap<&'static str, Arc<RuleSegmenter>>> = OnceLock::new();

const ENGLISH_RULES: &str = include_str!("../../configs/segmenter/english.toml");

fn embedded() -> &'static HashMap<&'static str, Arc<RuleSegmenter>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match RuleSegmenter::from_toml_str(ENGLISH_RULES) {
            Ok(rules) => {
                let rules = Arc::new(rules);
                map.insert("en", Arc::clone(&rules));
                map.insert("english", rules);
            }
            Err(e) => {
                log::error!("Failed to load embedded English segmenter rules: {e}");
            }
        }

        map
    })
}

/// Look up an embedded rule set by code or name
pub fn get_rules(code: &str) -> Result<Arc<RuleSegmenter>> {
    embedded()
        .get(code.to_lowercase().as_str())
        .cloned()
        .ok_or_else(|| Error::Configuration(format!("Unknown segmenter rules: {code}")))
}

/// Codes of the embedded rule sets
pub fn available_rules() -> Vec<&'static str> {
    let mut codes: Vec<_> = embedded().keys().copied().collect();
    codes.sort_unstable();
    codes
}
