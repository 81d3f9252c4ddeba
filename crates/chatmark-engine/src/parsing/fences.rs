//! # Fence Extraction
//!
//! First pipeline stage. Fenced code regions are cut out of the source before
//! any block or inline parsing happens, so their content is never rewritten.
//!
//! The result is a tagged sequence of [`Piece`]s: text regions that continue
//! through the pipeline, and references to [`CodeBlock`] records that are
//! only touched again by the HTML renderer.

use super::{blocks::kinds::CodeFence, span::Span};

/// A fenced code block lifted out of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Position in first-seen order, starting at 0 for every document.
    pub index: usize,
    /// Normalized language tag, `plaintext` when absent or rejected.
    pub language: String,
    /// Raw text between the fences, trimmed once. Not escaped.
    pub content: String,
    /// Full byte span of the fence in the source, delimiters included.
    pub span: Span,
}

impl CodeBlock {
    /// The reserved token that stands for this block in diagnostics.
    pub fn placeholder(&self) -> String {
        format!("%%%CODEBLOCK_{}%%%", self.index)
    }

    /// Whether the rendered block carries a visible language label.
    pub fn has_label(&self) -> bool {
        self.language != CodeFence::DEFAULT_LANGUAGE
    }
}

/// One region of the source after fence extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Text that still needs block and inline parsing.
    Text(Span),
    /// A code block, by index into [`Extracted::code_blocks`].
    Code(usize),
}

/// Output of [`extract_fences`].
#[derive(Debug, Default)]
pub struct Extracted {
    /// Source regions in original order.
    pub pieces: Vec<Piece>,
    /// Code block records, ordered by index.
    pub code_blocks: Vec<CodeBlock>,
}

/// A fence matched at a given opening position.
struct FenceMatch {
    language: String,
    body: Span,
    end: usize,
}

/// Splits `source` into text pieces and fenced code blocks.
///
/// A fence is three backticks, an optional tag on the same line, a newline,
/// a body, and the next three backticks. The body match is non-greedy so each
/// fence in the input is captured separately. An opening fence without a
/// closing one is left in place as literal text.
pub fn extract_fences(source: &str) -> Extracted {
    let mut out = Extracted::default();
    let mut text_start = 0usize;
    let mut search_from = 0usize;

    while let Some(found) = source[search_from..].find(CodeFence::BACKTICKS) {
        let open = search_from + found;
        let fence = match match_fence(source, open) {
            Ok(fence) => fence,
            Err(NoFence::RetryAt(next)) => {
                search_from = next;
                continue;
            }
            Err(NoFence::Exhausted) => break,
        };

        push_text(&mut out.pieces, text_start, open);
        let index = out.code_blocks.len();
        out.code_blocks.push(CodeBlock {
            index,
            language: fence.language,
            content: fence.body.slice(source).trim().to_string(),
            span: Span {
                start: open,
                end: fence.end,
            },
        });
        out.pieces.push(Piece::Code(index));

        text_start = fence.end;
        search_from = fence.end;
    }

    push_text(&mut out.pieces, text_start, source.len());
    out
}

fn push_text(pieces: &mut Vec<Piece>, start: usize, end: usize) {
    if end > start {
        pieces.push(Piece::Text(Span { start, end }));
    }
}

/// Why no fence opens at a given position.
#[derive(Debug, PartialEq, Eq)]
enum NoFence {
    /// No fence can open before this byte offset.
    RetryAt(usize),
    /// No fence can open anywhere after this position.
    Exhausted,
}

/// Attempts to match a complete fence whose opening backticks start at `open`.
///
/// Failures report how far the caller may skip, so a long run of backticks
/// on one line is scanned once rather than once per backtick.
fn match_fence(source: &str, open: usize) -> Result<FenceMatch, NoFence> {
    let info_start = open + CodeFence::BACKTICKS.len();
    let newline = source[info_start..]
        .find('\n')
        .ok_or(NoFence::Exhausted)?
        + info_start;
    let info = &source[info_start..newline];
    if !CodeFence::is_info_line(info) {
        // Only the last three backticks of this line can still open a fence.
        let last_tick = info.rfind('`').map_or(info_start, |i| info_start + i);
        return Err(NoFence::RetryAt(last_tick + 1 - CodeFence::BACKTICKS.len()));
    }

    let body_start = newline + 1;
    let Some(close) = source[body_start..].find(CodeFence::BACKTICKS) else {
        log::debug!("unterminated code fence at byte {open}, keeping it as text");
        return Err(NoFence::Exhausted);
    };
    let close = body_start + close;

    Ok(FenceMatch {
        language: CodeFence::language(info),
        body: Span {
            start: body_start,
            end: close,
        },
        end: close + CodeFence::BACKTICKS.len(),
    })
}
