use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (one heading, list item, or paragraph line)
///
/// # Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// Strong runs are matched next over the whole line. Single `*` and `_`
/// delimiters are paired last and only in the text between those, so a stray
/// `*` never splits a later `**strong**` run.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let line = Cursor::new(s, base);
    let atoms = parse_atoms(line.clone());
    pair_emphasis(&line, atoms)
}

fn push_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(Span { start, end }));
    }
}

/// Matches code spans and strong runs, leaving everything else as text.
fn parse_atoms(mut cur: Cursor<'_>) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let parsed = try_parse_code_span(&mut cur).or_else(|| try_parse_strong(&mut cur));
        if let Some(node) = parsed {
            let span = node.span();
            push_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(node);
            continue;
        }
        cur.advance(1);
    }

    push_text(&mut out, text_start, cur.pos());
    out
}

/// Spans of a successfully matched delimiter pair.
struct Delimited {
    full: Span,
    inner: Span,
}

/// Matches `delim`, non-empty content, and the next occurrence of `delim`.
///
/// On failure, cursor position is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &[u8]) -> Option<Delimited> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.advance(delim.len());
    let inner_start = cur.pos();

    if !cur.seek(delim) || cur.pos() == inner_start {
        // Not closed, or nothing inside: restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.advance(delim.len());

    Some(Delimited {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse a code span starting at the current position.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let d = try_parse_delimited(cur, CodeSpan::TICK)?;
    Some(InlineNode::CodeSpan {
        full: d.full,
        inner: d.inner,
    })
}

/// Attempts to parse `**strong**` or `__strong__` at the current position.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    for delim in Emphasis::STRONG {
        if let Some(d) = try_parse_delimited(cur, delim) {
            return Some(InlineNode::Strong {
                full: d.full,
                children: parse_inline(d.inner.start, cur.slice(d.inner)),
            });
        }
    }
    None
}

/// Pairs `*emphasis*` and `_emphasis_` across the text nodes of `nodes`.
///
/// Code spans and strong runs are atoms: a pair may enclose them but its
/// delimiters are only ever found in text. The first closing delimiter wins
/// and the enclosed nodes are paired again for the other delimiter.
fn pair_emphasis(line: &Cursor<'_>, mut nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut k = 0;

    'scan: while k < nodes.len() {
        let InlineNode::Text(text) = &nodes[k] else {
            k += 1;
            continue;
        };
        let text = *text;
        let mut cur = Cursor::new(line.slice(text), text.start);

        while !cur.eof() {
            let opener = cur.pos();
            for delim in Emphasis::SINGLE {
                if !cur.starts_with(delim) {
                    continue;
                }
                let inner_start = opener + delim.len();
                let Some((k2, close)) = find_closer(line, &nodes, k, inner_start, delim) else {
                    continue;
                };
                let inner = enclosed(&nodes, k, inner_start, k2, close);
                if inner.is_empty() {
                    continue;
                }

                let end = close + delim.len();
                let mut rest = vec![];
                push_text(&mut rest, end, nodes[k2].span().end);
                rest.extend(nodes.drain(k2 + 1..));
                nodes.truncate(k);
                out.append(&mut nodes);
                push_text(&mut out, text.start, opener);
                out.push(InlineNode::Emphasis {
                    full: Span { start: opener, end },
                    children: pair_emphasis(line, inner),
                });

                nodes = rest;
                k = 0;
                continue 'scan;
            }
            cur.advance(1);
        }
        k += 1;
    }

    out.append(&mut nodes);
    out
}

/// First `delim` at or after `from`, searching text nodes from `nodes[k]` on.
fn find_closer(
    line: &Cursor<'_>,
    nodes: &[InlineNode],
    k: usize,
    from: usize,
    delim: &[u8],
) -> Option<(usize, usize)> {
    nodes.iter().enumerate().skip(k).find_map(|(idx, node)| {
        let InlineNode::Text(text) = node else {
            return None;
        };
        let start = if idx == k { from } else { text.start };
        let mut cur = Cursor::new(
            line.slice(Span {
                start,
                end: text.end,
            }),
            start,
        );
        cur.seek(delim).then(|| (idx, cur.pos()))
    })
}

/// Nodes strictly between an opener in `nodes[k]` and a closer in `nodes[k2]`.
fn enclosed(
    nodes: &[InlineNode],
    k: usize,
    start: usize,
    k2: usize,
    close: usize,
) -> Vec<InlineNode> {
    let mut inner = vec![];
    if k2 == k {
        push_text(&mut inner, start, close);
        return inner;
    }
    push_text(&mut inner, start, nodes[k].span().end);
    inner.extend(nodes[k + 1..k2].iter().cloned());
    push_text(&mut inner, nodes[k2].span().start, close);
    inner
}
