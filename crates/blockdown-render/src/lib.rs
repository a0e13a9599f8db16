//! Blockdown Render
//!
//! This crate provides the output engines for blockdown, converting
//! parsed blocks into styled terminal text or an HTML fragment.
//!
//! # Features
//!
//! - **Styled headings** - h1 centered, h2 with an underline rule
//! - **Bullet lists** - Configurable bullet with hanging indent
//! - **Word wrapping** - Width-aware, wide-character correct
//! - **HTML output** - One element per block, escaped content
//!
//! # Example
//!
//! ```
//! use blockdown_core::Block;
//! use blockdown_render::Renderer;
//!
//! let blocks = vec![Block::Heading1("Hello World".to_string())];
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output, 80);
//! renderer.render(&blocks).unwrap();
//!
//! assert!(String::from_utf8(output).unwrap().contains("Hello World"));
//! ```

pub mod ansi;
pub mod heading;
pub mod html;
pub mod list;
pub mod text;

pub use heading::render_heading;
pub use html::render_html;
pub use list::render_list;
pub use text::simple_wrap;

use std::io::Write;

use crate::ansi::{hex2rgb, FG};
use blockdown_config::StyleConfig;
use blockdown_core::Block;

/// Generate foreground color escape code from hex string.
pub fn fg_color(hex: &str) -> String {
    if let Some((r, g, b)) = hex2rgb(hex) {
        format!("{}{};{};{}m", FG, r, g, b)
    } else {
        String::new()
    }
}

/// Render style configuration.
///
/// Contains colors and layout settings for the terminal renderer.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Heading color (h1)
    pub heading: String,
    /// Subheading color (h2)
    pub subheading: String,
    /// Symbol color (list bullets)
    pub symbol: String,
    /// Grey/muted color (rules)
    pub grey: String,
    /// Bullet character for list items
    pub bullet: String,
    /// Left margin in columns
    pub margin: usize,
    /// Center h1 headings
    pub centered: bool,
    /// Emit ANSI codes at all
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            heading: "#87ceeb".to_string(),    // Sky blue
            subheading: "#98fb98".to_string(), // Pale green
            symbol: "#dda0dd".to_string(),     // Plum
            grey: "#808080".to_string(),       // Grey
            bullet: "•".to_string(),
            margin: 2,
            centered: true,
            color: true,
        }
    }
}

impl RenderStyle {
    /// Create from a style config, with color enabled.
    pub fn from_config(style: &StyleConfig) -> Self {
        Self {
            heading: style.heading.clone(),
            subheading: style.subheading.clone(),
            symbol: style.symbol.clone(),
            grey: style.grey.clone(),
            bullet: style.bullet.clone(),
            margin: style.margin,
            centered: style.heading_centered,
            color: true,
        }
    }

    /// Foreground color code for a hex color, or nothing when color is off.
    pub fn fg(&self, hex: &str) -> String {
        if self.color {
            fg_color(hex)
        } else {
            String::new()
        }
    }

    /// Pass a formatting code through, or nothing when color is off.
    pub fn code(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

/// Terminal renderer for parsed blocks.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Terminal width
    width: usize,
    /// Render style
    style: RenderStyle,
}

impl<W: Write> Renderer<W> {
    /// Create a new renderer with default style.
    pub fn new(writer: W, width: usize) -> Self {
        Self {
            writer,
            width,
            style: RenderStyle::default(),
        }
    }

    /// Create a renderer with custom style.
    pub fn with_style(writer: W, width: usize, style: RenderStyle) -> Self {
        let mut r = Self::new(writer, width);
        r.style = style;
        r
    }

    /// Get the current width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the style.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Set the render style.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Left margin string from the style.
    fn left_margin(&self) -> String {
        " ".repeat(self.style.margin)
    }

    /// Width available for content once the margin is taken out.
    fn current_width(&self) -> usize {
        self.width.saturating_sub(self.style.margin)
    }

    /// Write a line to the output.
    fn writeln(&mut self, s: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", s)
    }

    /// Render a sequence of blocks with a blank line between them.
    pub fn render(&mut self, blocks: &[Block]) -> std::io::Result<()> {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                self.writeln("")?;
            }
            self.render_block(block)?;
        }
        self.writer.flush()
    }

    /// Render a single block.
    pub fn render_block(&mut self, block: &Block) -> std::io::Result<()> {
        let width = self.current_width();
        let margin = self.left_margin();

        let lines = match block {
            Block::Heading1(text) => render_heading(1, text, width, &margin, &self.style),
            Block::Heading2(text) => render_heading(2, text, width, &margin, &self.style),
            Block::Paragraph(text) => simple_wrap(text, width)
                .into_iter()
                .map(|line| format!("{}{}", margin, line))
                .collect(),
            Block::List(items) => render_list(items, width, &margin, &self.style),
        };

        for line in lines {
            self.writeln(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::BOLD_ON;
    use blockdown_core::ListItem;

    fn plain_style() -> RenderStyle {
        RenderStyle {
            margin: 0,
            centered: false,
            color: false,
            ..RenderStyle::default()
        }
    }

    fn render_plain(blocks: &[Block]) -> String {
        let mut output = Vec::new();
        let mut renderer = Renderer::with_style(&mut output, 80, plain_style());
        renderer.render(blocks).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_heading() {
        let mut output = Vec::new();
        let mut renderer = Renderer::new(&mut output, 80);

        renderer
            .render_block(&Block::Heading1("Title".to_string()))
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("Title"));
        assert!(result.contains(BOLD_ON));
    }

    #[test]
    fn test_render_h2_colored() {
        let mut output = Vec::new();
        let mut renderer = Renderer::new(&mut output, 80);

        renderer
            .render_block(&Block::Heading2("Subtitle".to_string()))
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("Subtitle"));
        assert!(result.contains("\x1b[38;2;"));
    }

    #[test]
    fn test_render_list() {
        let block = Block::List(vec![ListItem::new(" one"), ListItem::new(" two")]);
        assert_eq!(render_plain(&[block]), "• one\n• two\n");
    }

    #[test]
    fn test_blank_line_between_blocks() {
        let blocks = [
            Block::Paragraph("one".to_string()),
            Block::Paragraph("two".to_string()),
        ];
        assert_eq!(render_plain(&blocks), "one\n\ntwo\n");
    }

    #[test]
    fn test_paragraph_wraps_to_width() {
        let mut output = Vec::new();
        let mut renderer = Renderer::with_style(
            &mut output,
            20,
            RenderStyle {
                margin: 0,
                color: false,
                ..RenderStyle::default()
            },
        );
        renderer
            .render_block(&Block::Paragraph(
                "a paragraph that is wider than twenty columns".to_string(),
            ))
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.lines().count() > 1);
        assert!(result.lines().all(|l| l.len() <= 20));
    }

    #[test]
    fn test_margin_prefixes_lines() {
        let mut output = Vec::new();
        let style = RenderStyle {
            margin: 4,
            color: false,
            ..RenderStyle::default()
        };
        let mut renderer = Renderer::with_style(&mut output, 80, style);
        renderer
            .render_block(&Block::Paragraph("hello".to_string()))
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "    hello\n");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_from_config_maps_fields() {
        let config = StyleConfig::default();
        let style = RenderStyle::from_config(&config);
        assert_eq!(style.heading, config.heading);
        assert_eq!(style.bullet, config.bullet);
        assert_eq!(style.margin, config.margin);
        assert!(style.color);
    }

    #[test]
    fn test_fg_color() {
        assert_eq!(fg_color("#ff0000"), "\x1b[38;2;255;0;0m");
        assert_eq!(fg_color("bogus"), "");
    }
}
