use crate::parsing::span::Span;

use super::kinds::ListKind;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A heading, level 1 to 6.
    Heading { level: u8 },
    /// A run of same-kind list items on consecutive lines.
    List { kind: ListKind },
    /// A paragraph (default when no other block opener matches).
    Paragraph,
    /// A fenced code block, by index into the document's code block records.
    Code { index: usize },
}

/// A parsed block with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block in the source.
    pub span: Span,
    /// Content spans for inline parsing: one per heading, list item, or
    /// paragraph line. Empty for code blocks, which are never inline parsed.
    pub lines: Vec<Span>,
}
