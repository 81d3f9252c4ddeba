//! # HTML Reassembly
//!
//! Last pipeline stage: turns parsed blocks back into one HTML fragment, in
//! source order, substituting each code block reference with its rendered
//! `<pre><code>` element.

use std::borrow::Cow;

use crate::render::RenderOptions;

use super::{
    blocks::{BlockKind, BlockNode, kinds::ListKind},
    escape::escape_html,
    fences::CodeBlock,
    inline::{InlineNode, parse_inline},
    span::Span,
};

/// Separator between rendered blocks.
const BLOCK_SEPARATOR: &str = "\n";
/// Separator between the lines of a paragraph.
const LINE_BREAK: &str = "<br>";

/// Renders a parsed document into an HTML fragment.
pub struct HtmlRenderer<'a> {
    source: &'a str,
    code_blocks: &'a [CodeBlock],
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(source: &'a str, code_blocks: &'a [CodeBlock], options: &'a RenderOptions) -> Self {
        Self {
            source,
            code_blocks,
            options,
        }
    }

    /// Renders `blocks` in order, one block per line of output.
    pub fn render(&self, blocks: &[BlockNode]) -> String {
        let mut rendered = Vec::with_capacity(blocks.len());
        for block in blocks {
            let html = self.render_block(block);
            if !html.is_empty() {
                rendered.push(html);
            }
        }
        rendered.join(BLOCK_SEPARATOR)
    }

    fn render_block(&self, block: &BlockNode) -> String {
        match block.kind {
            BlockKind::Heading { level } => {
                let text = block
                    .lines
                    .first()
                    .map(|sp| self.render_inline_span(*sp))
                    .unwrap_or_default();
                format!("<h{level}>{text}</h{level}>")
            }
            BlockKind::List { kind } => {
                let tag = match kind {
                    ListKind::Unordered => "ul",
                    ListKind::Ordered => "ol",
                };
                let items: String = block
                    .lines
                    .iter()
                    .map(|sp| format!("<li>{}</li>", self.render_inline_span(*sp)))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            BlockKind::Paragraph => {
                let lines: Vec<String> = block
                    .lines
                    .iter()
                    .map(|sp| self.render_inline_span(*sp))
                    .collect();
                format!("<p>{}</p>", lines.join(LINE_BREAK))
            }
            BlockKind::Code { index } => match self.code_blocks.get(index) {
                Some(code) => render_code_block(code),
                None => {
                    log::warn!("code block {index} referenced but never extracted");
                    String::new()
                }
            },
        }
    }

    fn render_inline_span(&self, sp: Span) -> String {
        let nodes = parse_inline(sp.start, sp.slice(self.source));
        let mut out = String::with_capacity(sp.len());
        self.push_inline(&mut out, &nodes);
        out
    }

    fn push_inline(&self, out: &mut String, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(sp) => out.push_str(&self.plain_text(*sp)),
                InlineNode::CodeSpan { inner, .. } => {
                    out.push_str("<code>");
                    out.push_str(&escape_html(inner.slice(self.source)));
                    out.push_str("</code>");
                }
                InlineNode::Strong { children, .. } => {
                    out.push_str("<strong>");
                    self.push_inline(out, children);
                    out.push_str("</strong>");
                }
                InlineNode::Emphasis { children, .. } => {
                    out.push_str("<em>");
                    self.push_inline(out, children);
                    out.push_str("</em>");
                }
            }
        }
    }

    /// Text outside code is passed through as-is unless escaping is enabled.
    fn plain_text(&self, sp: Span) -> Cow<'a, str> {
        let text = sp.slice(self.source);
        if self.options.escape_plain_text {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Renders one code block record as `<pre><code>`, with a language label
/// when the fence named a language.
pub fn render_code_block(code: &CodeBlock) -> String {
    let body = format!(
        "<code class=\"language-{}\">{}</code>",
        code.language,
        escape_html(&code.content)
    );
    if code.has_label() {
        format!(
            "<pre><span class=\"code-label\">{}</span>{body}</pre>",
            code.language
        )
    } else {
        format!("<pre>{body}</pre>")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn code(language: &str, content: &str) -> CodeBlock {
        CodeBlock {
            index: 0,
            language: language.to_string(),
            content: content.to_string(),
            span: Span { start: 0, end: 0 },
        }
    }

    #[test]
    fn labelled_code_block() {
        assert_eq!(
            render_code_block(&code("python", "print(1)")),
            "<pre><span class=\"code-label\">python</span><code class=\"language-python\">print(1)</code></pre>"
        );
    }

    #[test]
    fn plaintext_code_block_has_no_label() {
        assert_eq!(
            render_code_block(&code("plaintext", "a < b")),
            "<pre><code class=\"language-plaintext\">a &lt; b</code></pre>"
        );
    }

    #[test]
    fn missing_code_record_renders_nothing() {
        let options = RenderOptions::default();
        let renderer = HtmlRenderer::new("", &[], &options);
        let blocks = [BlockNode {
            kind: BlockKind::Code { index: 3 },
            span: Span { start: 0, end: 0 },
            lines: vec![],
        }];
        assert_eq!(renderer.render(&blocks), "");
    }

    #[test]
    fn plain_text_is_escaped_only_when_enabled() {
        let source = "a <b> & c";
        let blocks = [BlockNode {
            kind: BlockKind::Paragraph,
            span: Span {
                start: 0,
                end: source.len(),
            },
            lines: vec![Span {
                start: 0,
                end: source.len(),
            }],
        }];

        let raw = RenderOptions::default();
        assert_eq!(
            HtmlRenderer::new(source, &[], &raw).render(&blocks),
            "<p>a <b> & c</p>"
        );

        let escaped = RenderOptions {
            escape_plain_text: true,
        };
        assert_eq!(
            HtmlRenderer::new(source, &[], &escaped).render(&blocks),
            "<p>a &lt;b&gt; &amp; c</p>"
        );
    }
}
