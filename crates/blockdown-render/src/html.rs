//! HTML rendering.
//!
//! Writes blocks as an HTML fragment, one element per line. Unlike the
//! terminal renderer this path does no wrapping or trimming: block
//! content goes out exactly as parsed, escaped for text context.

use blockdown_core::Block;
use html_escape::encode_text;
use std::fmt::Write;

/// Render blocks as an HTML fragment.
///
/// Each block becomes one line: `<h1>`, `<h2>`, `<p>`, or a `<ul>` with
/// one `<li>` per item. An empty slice produces an empty string.
///
/// # Example
///
/// ```
/// use blockdown_core::Block;
/// use blockdown_render::html::render_html;
///
/// let blocks = vec![Block::Heading1("Hi".to_string())];
/// assert_eq!(render_html(&blocks), "<h1>Hi</h1>\n");
/// ```
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading1(text) => {
                let _ = writeln!(out, "<h1>{}</h1>", encode_text(text));
            }
            Block::Heading2(text) => {
                let _ = writeln!(out, "<h2>{}</h2>", encode_text(text));
            }
            Block::Paragraph(text) => {
                let _ = writeln!(out, "<p>{}</p>", encode_text(text));
            }
            Block::List(items) => {
                out.push_str("<ul>");
                for item in items {
                    let _ = write!(out, "<li>{}</li>", encode_text(&item.content));
                }
                out.push_str("</ul>\n");
            }
        }
    }

    out
}
