//! Style configuration.
//!
//! This module contains the `StyleConfig` struct which holds the
//! visual settings for the terminal renderer: margins, width, heading
//! alignment, the bullet glyph, and the element colors.

use serde::{Deserialize, Serialize};

/// Style configuration.
///
/// Colors are `#rrggbb` hex strings applied to the element each field
/// is named after. TOML keys use PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Left margin in characters.
    /// Default: 2
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Terminal width override (0 = auto-detect).
    /// Default: 0
    #[serde(default)]
    pub width: usize,

    /// Center level-1 headings.
    /// Default: true
    #[serde(default = "default_true")]
    pub heading_centered: bool,

    /// Bullet glyph for list items.
    /// Default: "•"
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Color for level-1 headings.
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Color for level-2 headings.
    #[serde(default = "default_subheading")]
    pub subheading: String,

    /// Color for markers such as list bullets.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Muted color for rules and secondary detail.
    #[serde(default = "default_grey")]
    pub grey: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin: 2,
            width: 0,
            heading_centered: true,
            bullet: "•".to_string(),
            heading: default_heading(),
            subheading: default_subheading(),
            symbol: default_symbol(),
            grey: default_grey(),
        }
    }
}

impl StyleConfig {
    /// Merge another StyleConfig into this one.
    pub fn merge(&mut self, other: &StyleConfig) {
        self.margin = other.margin;
        self.width = other.width;
        self.heading_centered = other.heading_centered;
        self.bullet.clone_from(&other.bullet);
        self.heading.clone_from(&other.heading);
        self.subheading.clone_from(&other.subheading);
        self.symbol.clone_from(&other.symbol);
        self.grey.clone_from(&other.grey);
    }

    /// Get effective width (auto-detect if 0).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            // Try to get terminal width, fallback to 80
            crossterm::terminal::size()
                .map(|(w, _)| w as usize)
                .unwrap_or(80)
        } else {
            self.width
        }
    }
}

fn default_margin() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_bullet() -> String {
    "•".to_string()
}

fn default_heading() -> String {
    "#87ceeb".to_string() // Sky blue
}

fn default_subheading() -> String {
    "#98fb98".to_string() // Pale green
}

fn default_symbol() -> String {
    "#dda0dd".to_string() // Plum
}

fn default_grey() -> String {
    "#808080".to_string() // Grey
}
