//! Blockdown Parser
//!
//! This crate turns markdown text into an ordered sequence of
//! [`Block`] values. It recognizes exactly four block kinds: level-1
//! and level-2 headings, paragraphs, and unordered lists.
//!
//! # Overview
//!
//! Parsing is a pure function with no state between calls:
//!
//! - The input splits into paragraph groups on blank-line pairs
//!   (`"\n\n"`).
//! - Within a group, each non-blank line classifies on its own
//!   ([`classify_line`]); blank lines produce nothing.
//! - Each group owns at most one list. The first list line appends a
//!   new `List` block right there in the output, and every later list
//!   line of the same group joins it, even when other lines sit in
//!   between. The next group starts over, so lists separated by a
//!   blank-line pair never merge.
//!
//! There is no failure mode: every input, including the empty string,
//! parses to a (possibly empty) sequence of blocks.
//!
//! # Example
//!
//! ```
//! use blockdown_core::Block;
//! use blockdown_parser::parse;
//!
//! let blocks = parse("# Title\n\nSome text");
//! assert_eq!(
//!     blocks,
//!     vec![
//!         Block::Heading1("Title".to_string()),
//!         Block::Paragraph("Some text".to_string()),
//!     ]
//! );
//! ```

pub mod classify;

pub use classify::{classify_line, Line};

use blockdown_core::{Block, ListItem};

/// Check whether a line is blank (empty or whitespace only).
///
/// Blank lines never produce a block; [`parse`] skips them.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse markdown text into an ordered sequence of blocks.
///
/// The output order matches the source: leaves land at the position of
/// their line, and a `List` lands at the position of its first item,
/// collecting every further list line of the same paragraph group.
///
/// This function is infallible and returns an empty vector for empty
/// or blank-only input.
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for group in input.split("\n\n") {
        // Index into `blocks` of this group's list, once one exists.
        let mut list: Option<usize> = None;

        for line in group.split('\n') {
            if is_blank(line) {
                continue;
            }

            match classify_line(line) {
                Line::Heading1(text) => blocks.push(Block::Heading1(text)),
                Line::Heading2(text) => blocks.push(Block::Heading2(text)),
                Line::Paragraph(text) => blocks.push(Block::Paragraph(text)),
                Line::ListItem(text) => {
                    let index = *list.get_or_insert_with(|| {
                        blocks.push(Block::List(Vec::new()));
                        blocks.len() - 1
                    });
                    if let Block::List(items) = &mut blocks[index] {
                        items.push(ListItem::new(text));
                    }
                }
            }
        }
    }

    blocks
}
