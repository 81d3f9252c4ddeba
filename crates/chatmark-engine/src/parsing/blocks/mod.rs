//! # Block Parsing
//!
//! Runs over the text pieces left between code fences, in two passes:
//!
//! 1. `classify`: `MarkdownLineClassifier` looks at one line at a time and
//!    reports blank, heading, list item or plain text, with the content span
//! 2. `builder`: `BlockBuilder` folds those classes into headings, lists and
//!    paragraphs, and slots code blocks in between
//!
//! Marker syntax (`#`, `-`, `1.`, fences) is owned by the types in `kinds`;
//! `types` holds the resulting `BlockNode`s.
//!
//! Adjacent list items of one kind always land in the same list, and a code
//! block never ends up inside another block.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
