//! Crude Markdown stripping
//!
//! Removes heading, emphasis, list and code markers (`#`, `*`, `-` and
//! backticks) character by character. This is not a renderer: links, tables
//! and HTML pass through untouched.

const MARKERS: [char; 4] = ['#', '*', '-', '`'];

/// Drop Markdown marker characters from `text`
pub fn strip_markdown(text: &str) -> String {
    text.chars().filter(|ch| !MARKERS.contains(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::count_words;

    #[test]
    fn test_strips_markers() {
        let text = "# Title\n\n- **bold** item\n- `code`";
        assert_eq!(strip_markdown(text), " Title\n\n bold item\n code");
    }

    #[test]
    fn test_hyphenated_words_are_joined() {
        // The stripper is character based, so hyphens go too
        assert_eq!(strip_markdown("well-known"), "wellknown");
        assert_eq!(count_words(&strip_markdown("well-known fact")), 2);
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Nothing to strip here. Really!";
        assert_eq!(strip_markdown(text), text);
    }
}
