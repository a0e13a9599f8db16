//! The block data model.
//!
//! A parsed document is an ordered sequence of [`Block`] values. Three of
//! the kinds are leaves carrying the text of a single source line; the
//! fourth, [`Block::List`], groups the list lines of one paragraph group
//! into a run of [`ListItem`] entries.

use serde::{Deserialize, Serialize};

/// A single structural unit of parsed markdown.
///
/// Leaf variants hold the line's text with its marker stripped. A list
/// holds its items directly, so a non-empty `List` can never contain
/// anything but list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Level-1 heading, from a line starting `"# "`.
    Heading1(String),
    /// Level-2 heading, from a line starting `"## "`.
    Heading2(String),
    /// Plain text line with no recognized marker.
    Paragraph(String),
    /// Consecutive `*`/`-` lines of one paragraph group.
    List(Vec<ListItem>),
}

/// A single entry of a [`Block::List`].
///
/// The content is everything after the one-character marker, so it
/// usually begins with the space that followed `*` or `-` in the source.
/// That space is kept on purpose; only the marker itself is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Text after the marker character.
    pub content: String,
}

impl ListItem {
    /// Create a list item from anything string-like.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Block {
    /// Short lowercase name of the block kind, mirroring the element
    /// each kind maps to when rendered.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading1(_) => "h1",
            Block::Heading2(_) => "h2",
            Block::Paragraph(_) => "p",
            Block::List(_) => "ul",
        }
    }

    /// Text content for leaf blocks, `None` for lists.
    pub fn content(&self) -> Option<&str> {
        match self {
            Block::Heading1(text) | Block::Heading2(text) | Block::Paragraph(text) => Some(text),
            Block::List(_) => None,
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Block::List(items) => write!(f, "{}({} items)", self.kind(), items.len()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}
