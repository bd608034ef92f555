//! Lookup tables backing the rule segmenter

pub mod abbreviation;
pub mod terminator;

pub use abbreviation::Trie;
pub use terminator::{DotRole, DotTable, TermTable};
