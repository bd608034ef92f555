//! Text heuristics: tokenization, syllables and Markdown stripping

mod markdown;
mod syllables;
mod tokenizer;

pub use markdown::strip_markdown;
pub use syllables::count_syllables;
pub use tokenizer::{count_sentences, count_words, tokenize_words, word_tokens, Token};
