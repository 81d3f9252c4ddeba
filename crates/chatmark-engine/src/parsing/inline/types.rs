use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `**strong**` or `__strong__`.
    Strong {
        /// Full span including delimiters.
        full: Span,
        /// Inline content between the delimiters.
        children: Vec<InlineNode>,
    },
    /// `*emphasis*` or `_emphasis_`.
    Emphasis {
        /// Full span including delimiters.
        full: Span,
        /// Inline content between the delimiters.
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. } => *full,
        }
    }
}
