//! Terminator character lookup and dot classification
//!
//! ASCII terminators go through a direct table, everything else through a
//! hash set.

use std::collections::HashSet;

/// Terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    ascii_table: [bool; 128],
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from a list of terminator characters
    pub fn new(terminators: &[char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for &ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Is `ch` a sentence terminator?
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// Role of a lone dot in context
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DotRole {
    /// Candidate sentence end (may still be an abbreviation)
    Ordinary,
    /// Part of a run of dots
    EllipsisTail,
    /// Decimal point (3.14)
    DecimalDot,
}

/// Dot context classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct DotTable;

impl DotTable {
    /// Classify a dot from its neighbours
    #[inline]
    pub fn classify(&self, prev: Option<char>, next: Option<char>) -> DotRole {
        if let (Some(p), Some(n)) = (prev, next) {
            if p.is_ascii_digit() && n.is_ascii_digit() {
                return DotRole::DecimalDot;
            }
        }

        if prev == Some('.') || next == Some('.') {
            return DotRole::EllipsisTail;
        }

        DotRole::Ordinary
    }
}
