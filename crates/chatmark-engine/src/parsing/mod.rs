//! # Parsing Pipeline
//!
//! `RAW → FENCES_EXTRACTED → BLOCKS_CLASSIFIED → INLINE_RENDERED → REASSEMBLED`
//!
//! 1. [`fences`] cuts fenced code out of the source into [`CodeBlock`] records
//! 2. [`blocks`] classifies the remaining lines and groups them into blocks
//! 3. [`inline`] parses emphasis and code spans inside each block line
//! 4. [`escape`] escapes code content (and plain text, when enabled)
//! 5. [`html`] reassembles everything into one fragment
//!
//! Stages 1 and 2 run in [`parse_document`]; 3 to 5 run lazily while
//! rendering. Nothing is shared between calls.

pub mod blocks;
pub mod escape;
pub mod fences;
pub mod html;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
pub use fences::CodeBlock;
use fences::{Piece, extract_fences};
use lines::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    /// Blocks in source order.
    pub blocks: Vec<BlockNode>,
    /// Extracted code blocks, referenced by index from `BlockKind::Code`.
    pub code_blocks: Vec<CodeBlock>,
}

pub fn parse_document(source: &str) -> ParsedDoc {
    let extracted = extract_fences(source);
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for piece in &extracted.pieces {
        match *piece {
            Piece::Text(region) => {
                for lr in lines_with_spans(source, region) {
                    let lc = classifier.classify(&lr);
                    builder.push(&lc);
                }
            }
            Piece::Code(index) => {
                let span = extracted.code_blocks[index].span;
                builder.push_code(index, span);
            }
        }
    }

    ParsedDoc {
        blocks: builder.finish(),
        code_blocks: extracted.code_blocks,
    }
}

/// Convenience: inline parse for every content line of a block.
///
/// Code blocks are raw zones and yield no inline nodes.
pub fn parse_inline_for_block(source: &str, b: &BlockNode) -> Vec<Vec<inline::InlineNode>> {
    if matches!(b.kind, BlockKind::Code { .. }) {
        return vec![];
    }
    b.lines
        .iter()
        .map(|sp| inline::parse_inline(sp.start, sp.slice(source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::blocks::kinds::ListKind;

    #[test]
    fn empty_document() {
        let doc = parse_document("");
        assert!(doc.blocks.is_empty());
        assert!(doc.code_blocks.is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(parse_document("\n\n\n").blocks.is_empty());
    }

    #[test]
    fn fence_after_text_line_is_its_own_block() {
        let src = "Here is code:\n```python\nprint(1)\n```";
        let doc = parse_document(src);
        let kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Paragraph, BlockKind::Code { index: 0 }]);
        assert_eq!(doc.blocks[0].lines[0].slice(src), "Here is code:");
    }

    #[test]
    fn text_after_closing_fence_continues_parsing() {
        let doc = parse_document("```\nx\n```\n- a\n- b");
        let kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Code { index: 0 },
                BlockKind::List {
                    kind: ListKind::Unordered
                }
            ]
        );
    }

    #[test]
    fn fenced_markdown_yields_no_inline_nodes() {
        let src = "```\n**not bold**\n```";
        let doc = parse_document(src);
        assert_eq!(doc.blocks.len(), 1);
        assert!(parse_inline_for_block(src, &doc.blocks[0]).is_empty());
    }

    #[test]
    fn inline_nodes_per_paragraph_line() {
        let src = "one *a*\ntwo";
        let doc = parse_document(src);
        let lines = parse_inline_for_block(src, &doc.blocks[0]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[1].len(), 1);
    }
}
