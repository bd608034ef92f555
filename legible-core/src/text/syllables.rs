//! Vowel-group syllable heuristic
//!
//! Counts the starts of vowel groups, removes a silent final `e`, gives it
//! back for `-le` endings and never reports fewer than one syllable for a
//! non-empty word. Expects lower-case input.

#[inline]
fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllables of a single lower-case word
///
/// Returns 0 only for the empty string, which the tokenizer never produces.
pub fn count_syllables(word: &str) -> usize {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    let mut count = usize::from(is_vowel(first));
    let mut prev = first;
    for ch in chars {
        if is_vowel(ch) && !is_vowel(prev) {
            count += 1;
        }
        prev = ch;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    if word.ends_with("le") {
        count += 1;
    }

    count.max(1)
}
