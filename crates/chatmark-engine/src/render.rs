use crate::parsing::{html::HtmlRenderer, parse_document};

/// Knobs for [`render_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Also HTML-escape text outside code spans and code blocks.
    ///
    /// Off by default: only code content is escaped, so a raw `<` in ordinary
    /// text reaches the output unchanged.
    pub escape_plain_text: bool,
}

/// Renders chat Markdown into an HTML fragment with default options.
///
/// Never fails: unterminated fences and unknown syntax degrade to literal
/// text. An empty input yields an empty string.
pub fn render(markdown: &str) -> String {
    render_with(markdown, &RenderOptions::default())
}

/// Renders chat Markdown into an HTML fragment.
pub fn render_with(markdown: &str, options: &RenderOptions) -> String {
    let doc = parse_document(markdown);
    HtmlRenderer::new(markdown, &doc.code_blocks, options).render(&doc.blocks)
}
