use crate::parsing::{lines::LineRef, span::Span};

use super::kinds::{Heading, ListItem, ListKind};

/// What a single line looks like, judged without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// `#`-prefixed heading; `text` is the trimmed heading content.
    Heading { level: u8, text: Span },
    /// Bullet or numbered item; `text` is the trimmed item content.
    ListItem { kind: ListKind, text: Span },
    /// Anything else; `text` is the trimmed line.
    Plain { text: Span },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Full byte span of this line in the source.
    pub line: Span,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, heading, list item, plain text.
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);

        let kind = if trimmed.trim().is_empty() {
            LineKind::Blank
        } else if let Some((level, offset)) = Heading::parse(trimmed) {
            LineKind::Heading {
                level,
                text: content_span(lr, trimmed, offset),
            }
        } else if let Some((kind, offset)) = ListItem::parse(trimmed) {
            LineKind::ListItem {
                kind,
                text: content_span(lr, trimmed, offset),
            }
        } else {
            LineKind::Plain {
                text: content_span(lr, trimmed, 0),
            }
        };

        LineClass {
            line: lr.span,
            kind,
        }
    }
}

/// Absolute span of `trimmed[offset..]` with surrounding whitespace removed.
fn content_span(lr: &LineRef<'_>, trimmed: &str, offset: usize) -> Span {
    let rest = &trimmed[offset..];
    let start = lr.span.start + offset + (rest.len() - rest.trim_start().len());
    Span {
        start,
        end: start + rest.trim().len(),
    }
}
