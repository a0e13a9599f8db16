//! ANSI escape codes and terminal text utilities.
//!
//! The renderer only ever emits SGR sequences (colors and bold), so
//! the helpers here cover exactly that: a few constants, hex color
//! parsing, and visible-width measurement that ignores escape codes
//! and accounts for wide characters.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Escape sequence prefix for 24-bit foreground color.
/// Usage: `format!("{}r;g;bm", FG)` where r, g, b are 0-255.
pub const FG: &str = "\x1b[38;2;";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Bold on.
pub const BOLD_ON: &str = "\x1b[1m";

/// Bold off (normal intensity).
pub const BOLD_OFF: &str = "\x1b[22m";

/// Regex pattern for ANSI SGR escape sequences.
pub const ESCAPE: &str = r"\x1b\[[0-9;]*[mK]";

/// Compiled regex for ESCAPE pattern.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ESCAPE).unwrap());

/// Parse a hex color string to RGB components.
///
/// # Arguments
///
/// * `hex` - A hex color string like "#ff0000" or "ff0000"
///
/// # Example
///
/// ```
/// use blockdown_render::ansi::hex2rgb;
/// assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(hex2rgb("nonsense"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    // is_ascii keeps the byte slicing below on char boundaries
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Remove all ANSI escape sequences from text.
///
/// # Example
///
/// ```
/// use blockdown_render::ansi::visible;
/// let text = "\x1b[1mBold\x1b[0m text";
/// assert_eq!(visible(text), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").to_string()
}

/// Calculate the visible display width of text in terminal columns.
///
/// Escape sequences count for nothing; CJK characters count double.
///
/// # Example
///
/// ```
/// use blockdown_render::ansi::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}
