//! Heading rendering.
//!
//! Renders the two heading levels with different styles:
//! - h1: Bold, heading color, centered (configurable)
//! - h2: Bold, subheading color, with a grey underline rule

use crate::ansi::{BOLD_OFF, BOLD_ON, RESET};
use crate::text::simple_wrap;
use crate::RenderStyle;
use unicode_width::UnicodeWidthStr;

/// Render a heading with appropriate styling.
///
/// # Arguments
/// * `level` - Heading level (1 or 2)
/// * `text` - The heading text
/// * `width` - Available width for rendering
/// * `left_margin` - Left margin/padding
/// * `style` - Render style configuration
///
/// # Returns
/// A vector of rendered lines
pub fn render_heading(
    level: u8,
    text: &str,
    width: usize,
    left_margin: &str,
    style: &RenderStyle,
) -> Vec<String> {
    let lines = simple_wrap(text, width);
    let mut result = Vec::new();

    match level {
        1 => {
            let fg = style.fg(&style.heading);
            for line in lines {
                let rendered = if style.centered {
                    let line_width = line.as_str().width();
                    let spaces_to_center = (width.saturating_sub(line_width)) / 2;
                    let center_pad = " ".repeat(spaces_to_center);
                    format!(
                        "{}{}{}{}{}{}{}",
                        left_margin,
                        style.code(BOLD_ON),
                        fg,
                        center_pad,
                        line,
                        style.code(BOLD_OFF),
                        style.code(RESET)
                    )
                } else {
                    format!(
                        "{}{}{}{}{}{}",
                        left_margin,
                        style.code(BOLD_ON),
                        fg,
                        line,
                        style.code(BOLD_OFF),
                        style.code(RESET)
                    )
                };
                result.push(rendered);
            }
        }
        _ => {
            // h2: left aligned with an underline rule
            let fg = style.fg(&style.subheading);
            for line in lines {
                result.push(format!(
                    "{}{}{}{}{}{}",
                    left_margin,
                    style.code(BOLD_ON),
                    fg,
                    line,
                    style.code(BOLD_OFF),
                    style.code(RESET)
                ));
            }

            let text_width = text.width();
            let rule_width = if width == 0 {
                text_width
            } else {
                text_width.min(width)
            };
            if rule_width > 0 {
                result.push(format!(
                    "{}{}{}{}",
                    left_margin,
                    style.fg(&style.grey),
                    "─".repeat(rule_width),
                    style.code(RESET)
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::visible;

    fn default_style() -> RenderStyle {
        RenderStyle::default()
    }

    #[test]
    fn test_h1_centered() {
        let lines = render_heading(1, "Title", 80, "", &default_style());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(BOLD_ON));
        // (80 - 5) / 2 = 37 columns of centering
        assert!(visible(&lines[0]).starts_with(&" ".repeat(37)));
    }

    #[test]
    fn test_h1_left_aligned() {
        let mut style = default_style();
        style.centered = false;
        let lines = render_heading(1, "Title", 80, "", &style);
        assert_eq!(visible(&lines[0]), "Title");
    }

    #[test]
    fn test_h2_has_rule() {
        let lines = render_heading(2, "Subtitle", 80, "", &default_style());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Subtitle"));
        assert_eq!(visible(&lines[1]), "─".repeat(8));
    }

    #[test]
    fn test_h2_colored() {
        let lines = render_heading(2, "Subtitle", 80, "", &default_style());
        assert!(lines[0].contains("\x1b[38;2;"));
    }

    #[test]
    fn test_color_off_is_plain() {
        let mut style = default_style();
        style.color = false;
        style.centered = false;
        let lines = render_heading(1, "Title", 80, "", &style);
        assert_eq!(lines[0], "Title");
    }

    #[test]
    fn test_heading_with_margin() {
        let lines = render_heading(2, "Subtitle", 80, "  ", &default_style());
        assert!(lines[0].starts_with("  "));
        assert!(lines[1].starts_with("  "));
    }

    #[test]
    fn test_long_heading_wraps() {
        let long_text = "This is a very long heading that should wrap to multiple lines";
        let lines = render_heading(1, long_text, 20, "", &default_style());
        assert!(lines.len() > 1);
    }

    #[test]
    fn test_empty_heading_has_no_rule() {
        let lines = render_heading(2, "", 80, "", &default_style());
        assert_eq!(lines.len(), 1);
        assert_eq!(visible(&lines[0]), "");
    }

    #[test]
    fn test_rule_capped_at_width() {
        let lines = render_heading(2, "A heading wider than the terminal", 10, "", &default_style());
        let rule = visible(lines.last().unwrap());
        assert_eq!(rule, "─".repeat(10));
    }
}
