use crate::parsing::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::ListKind,
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph { start: usize, last_line_end: usize, lines: Vec<Span> },
    List { kind: ListKind, start: usize, last_line_end: usize, items: Vec<Span> },
}

/// Phase 2 of block parsing: groups classified lines into [`BlockNode`]s.
///
/// Consecutive plain lines form one paragraph. Consecutive list items of the
/// same kind form one list; a change of kind, a blank line, or any other
/// line closes it.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match c.kind {
            LineKind::Blank => self.flush(),
            LineKind::Heading { level, text } => {
                self.flush();
                self.out.push(BlockNode {
                    kind: BlockKind::Heading { level },
                    span: c.line,
                    lines: vec![text],
                });
            }
            LineKind::ListItem { kind, text } => self.extend_list(kind, c.line, text),
            LineKind::Plain { text } => self.extend_paragraph(c.line, text),
        }
    }

    /// Emits a code block. Code always stands alone between other blocks.
    pub fn push_code(&mut self, index: usize, span: Span) {
        self.flush();
        self.out.push(BlockNode {
            kind: BlockKind::Code { index },
            span,
            lines: vec![],
        });
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush();
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, line: Span, text: Span) {
        match &mut self.leaf {
            LeafState::List {
                kind: open_kind,
                last_line_end,
                items,
                ..
            } if *open_kind == kind => {
                *last_line_end = line.end;
                items.push(text);
            }
            _ => {
                self.flush();
                self.leaf = LeafState::List {
                    kind,
                    start: line.start,
                    last_line_end: line.end,
                    items: vec![text],
                };
            }
        }
    }

    fn extend_paragraph(&mut self, line: Span, text: Span) {
        match &mut self.leaf {
            LeafState::Paragraph {
                last_line_end,
                lines,
                ..
            } => {
                *last_line_end = line.end;
                lines.push(text);
            }
            _ => {
                self.flush();
                self.leaf = LeafState::Paragraph {
                    start: line.start,
                    last_line_end: line.end,
                    lines: vec![text],
                };
            }
        }
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph {
                start,
                last_line_end,
                lines,
            } => BlockNode {
                kind: BlockKind::Paragraph,
                span: Span {
                    start,
                    end: last_line_end,
                },
                lines,
            },
            LeafState::List {
                kind,
                start,
                last_line_end,
                items,
            } => BlockNode {
                kind: BlockKind::List { kind },
                span: Span {
                    start,
                    end: last_line_end,
                },
                lines: items,
            },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
