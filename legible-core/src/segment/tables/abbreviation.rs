//! Abbreviation trie for backward scanning from a dot
//!
//! Nodes live in one contiguous vector and refer to their children by index.
//! Lookups are case-insensitive unless the trie is built otherwise.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    is_end: bool,
}

/// Abbreviation trie
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
}

/// Characters that end the backward scan for an abbreviation
#[inline]
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ',' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '!' | '?'
                | '\u{201C}' | '\u{2018}'
        )
}

impl Trie {
    /// Create an empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
        }
    }

    /// Build from categorised abbreviation lists
    ///
    /// Multi-period abbreviations such as `U.S.A` also register their
    /// prefixes (`U`, `U.S`) so every inner dot is recognised.
    pub fn from_categories(
        categories: &HashMap<String, Vec<String>>,
        case_sensitive: bool,
    ) -> Self {
        let mut trie = Self::new(case_sensitive);

        for abbreviations in categories.values() {
            for abbr in abbreviations {
                let abbr = abbr.trim_end_matches('.');
                trie.insert(abbr);

                let parts: Vec<&str> = abbr.split('.').collect();
                for i in 1..parts.len() {
                    let prefix = parts[..i].join(".");
                    if !prefix.is_empty() {
                        trie.insert(&prefix);
                    }
                }
            }
        }

        trie
    }

    /// Insert an abbreviation (without its final dot)
    pub fn insert(&mut self, abbreviation: &str) {
        let mut current = 0usize;

        for ch in abbreviation.chars() {
            let ch = self.normalize(ch);
            let existing = self.nodes[current].children.get(&ch).copied();
            current = match existing {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        self.nodes[current].is_end = true;
    }

    /// Does an abbreviation end right before the dot at `pos - 1`?
    ///
    /// `pos` is the byte position just after the dot.
    pub fn find_abbrev(&self, text: &str, pos: usize) -> bool {
        if pos == 0 || pos > text.len() || !text.is_char_boundary(pos) {
            return false;
        }
        let before = &text[..pos];
        if !before.ends_with('.') {
            return false;
        }

        let dot_pos = pos - 1;
        let word_start = text[..dot_pos]
            .char_indices()
            .rev()
            .find(|&(_, ch)| is_delimiter(ch))
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);

        let word = &text[word_start..dot_pos];
        !word.is_empty() && self.matches(word)
    }

    fn matches(&self, word: &str) -> bool {
        let mut current = 0usize;

        for ch in word.chars() {
            match self.nodes[current].children.get(&self.normalize(ch)) {
                Some(&child) => current = child as usize,
                None => return false,
            }
        }

        self.nodes[current].is_end
    }

    #[inline]
    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}
