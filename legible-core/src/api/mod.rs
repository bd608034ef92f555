//! High-level analysis API
//!
//! [`Analyzer`] bundles the sentence segmenter, the familiar-word list and
//! an optional result cache behind the core operations.

mod analyzer;
mod config;


pub use analyzer::Analyzer;
pub use config::{defaults, Config, ConfigBuilder};
