//! Plain-text word wrapping.
//!
//! Block content carries no escape codes of its own; the renderer
//! applies color around whole lines after wrapping. That keeps the
//! wrapping here simple: split on whitespace, measure with
//! `unicode-width`, and refill.

use unicode_width::UnicodeWidthStr;

/// Wrap text to fit within a given visible width.
///
/// Words longer than the width get a line of their own rather than
/// being broken mid-word. A width of 0 disables wrapping.
///
/// # Arguments
///
/// * `text` - The text to wrap
/// * `width` - Maximum width in terminal columns
///
/// # Example
///
/// ```
/// use blockdown_render::text::simple_wrap;
/// let lines = simple_wrap("one two three", 7);
/// assert_eq!(lines, vec!["one two", "three"]);
/// ```
pub fn simple_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.width();
        let current_len = current.as_str().width();

        if current.is_empty() {
            current = word.to_string();
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(simple_wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_width() {
        let lines = simple_wrap("hello world foo bar", 11);
        assert_eq!(lines, vec!["hello world", "foo bar"]);
    }

    #[test]
    fn test_zero_width_disables_wrapping() {
        assert_eq!(
            simple_wrap("hello world foo bar", 0),
            vec!["hello world foo bar"]
        );
    }

    #[test]
    fn test_long_word_keeps_own_line() {
        let lines = simple_wrap("hi incomprehensibilities yo", 10);
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn test_whitespace_only_yields_empty_line() {
        assert_eq!(simple_wrap("   ", 10), vec![""]);
    }

    #[test]
    fn test_cjk_counts_double_width() {
        // Each character is two columns, so only two fit per line
        let lines = simple_wrap("日本 語学", 5);
        assert_eq!(lines, vec!["日本", "語学"]);
    }
}
