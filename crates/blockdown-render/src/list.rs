//! List rendering.
//!
//! Lists are always flat, so rendering is one bullet line per item
//! with a hanging indent for wrapped content. The bullet character
//! comes from the style and is drawn in the symbol color.

use crate::ansi::RESET;
use crate::text::simple_wrap;
use crate::RenderStyle;
use blockdown_core::ListItem;
use unicode_width::UnicodeWidthStr;

/// Render a list.
///
/// # Arguments
/// * `items` - The list items, in order
/// * `width` - Available width
/// * `left_margin` - Left margin string
/// * `style` - Render style
///
/// # Returns
/// Vector of rendered lines (items may span multiple lines if they wrap)
pub fn render_list(
    items: &[ListItem],
    width: usize,
    left_margin: &str,
    style: &RenderStyle,
) -> Vec<String> {
    let marker = style.bullet.as_str();
    let marker_width = marker.width();
    let content_indent = marker_width + 1;
    let content_width = width.saturating_sub(content_indent);

    let colored_marker = format!("{}{}{}", style.fg(&style.symbol), marker, style.code(RESET));
    let continuation = format!("{}{}", left_margin, " ".repeat(content_indent));

    let mut result = Vec::new();

    for item in items {
        let wrapped = simple_wrap(&item.content, content_width);
        let mut lines = wrapped.into_iter();

        if let Some(first) = lines.next() {
            result.push(format!("{}{} {}", left_margin, colored_marker, first));
        }
        for rest in lines {
            result.push(format!("{}{}", continuation, rest));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::visible;

    fn plain_style() -> RenderStyle {
        let mut style = RenderStyle::default();
        style.color = false;
        style
    }

    fn item(content: &str) -> ListItem {
        ListItem::new(content)
    }

    #[test]
    fn test_bullet_and_content() {
        let lines = render_list(&[item(" one")], 80, "", &RenderStyle::default());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("•"));
        assert!(lines[0].contains("one"));
    }

    #[test]
    fn test_one_line_per_item() {
        let items = [item(" one"), item(" two"), item(" three")];
        let lines = render_list(&items, 80, "", &plain_style());
        assert_eq!(lines, vec!["• one", "• two", "• three"]);
    }

    #[test]
    fn test_marker_is_colored() {
        let lines = render_list(&[item(" one")], 80, "", &RenderStyle::default());
        assert!(lines[0].contains("\x1b[38;2;"));
    }

    #[test]
    fn test_long_item_hanging_indent() {
        let items = [item(" a rather long list item that wraps")];
        let lines = render_list(&items, 20, "", &plain_style());
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("• "));
        assert!(lines[1].starts_with("  "));
        assert_eq!(visible(&lines[1]).trim_start(), lines[1].trim_start());
    }

    #[test]
    fn test_custom_bullet() {
        let mut style = plain_style();
        style.bullet = "-".to_string();
        let lines = render_list(&[item(" one")], 80, "", &style);
        assert_eq!(lines, vec!["- one"]);
    }

    #[test]
    fn test_margin_applied_to_continuations() {
        let items = [item(" a rather long list item that wraps")];
        let lines = render_list(&items, 22, "  ", &plain_style());
        assert!(lines[0].starts_with("  • "));
        assert!(lines[1].starts_with("    "));
    }
}
