//! Line classification.
//!
//! Every non-blank line of input maps to exactly one [`Line`] leaf.
//! There is no unrecognized case: anything that is not a heading or a
//! list line is a paragraph.

/// A single classified line of input.
///
/// Each variant carries the line's content with the marker stripped,
/// as described on [`classify_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Line starting with the exact prefix `"# "`.
    Heading1(String),
    /// Line starting with the exact prefix `"## "`.
    Heading2(String),
    /// Line starting with `*` or `-`.
    ListItem(String),
    /// Any other line, kept unchanged.
    Paragraph(String),
}

/// Classify a single non-blank line into a leaf block.
///
/// The checks run in order and the first match wins:
///
/// 1. The exact two characters `"# "` start a level-1 heading; content
///    is the rest of the line, with no further trimming.
/// 2. The exact three characters `"## "` start a level-2 heading.
/// 3. A `*` or `-` in the first column starts a list item. Only the
///    marker character itself is stripped, so the content normally
///    keeps the space that followed it; the space is part of the
///    heading markers but not of the list markers.
/// 4. Everything else is a paragraph, content unchanged.
///
/// The heading checks are exact prefix matches, not a "starts with `#`"
/// heuristic: `"## Sub"` does not start with `"# "`, so rule 1 can
/// never swallow a level-2 heading, and `"### deep"` matches neither
/// and falls through to a paragraph.
///
/// # Example
///
/// ```
/// use blockdown_parser::{classify_line, Line};
///
/// assert_eq!(classify_line("# Title"), Line::Heading1("Title".into()));
/// assert_eq!(classify_line("* one"), Line::ListItem(" one".into()));
/// assert_eq!(classify_line("plain"), Line::Paragraph("plain".into()));
/// ```
pub fn classify_line(line: &str) -> Line {
    if let Some(rest) = line.strip_prefix("# ") {
        return Line::Heading1(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Heading2(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix('*').or_else(|| line.strip_prefix('-')) {
        return Line::ListItem(rest.to_string());
    }
    Line::Paragraph(line.to_string())
}
