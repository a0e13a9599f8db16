//! Blockdown Core
//!
//! This crate provides the core types and error definitions
//! for the blockdown markdown previewer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`] - The structural unit every other crate consumes
//! - [`ListItem`] - A single entry of a [`Block::List`]
//! - [`BlockdownError`] - Error types for the layers around the parser

pub mod block;
pub mod error;

pub use block::{Block, ListItem};
pub use error::{BlockdownError, Result};
