use std::borrow::Cow;

/// HTML-escapes `&`, `<`, `>`, `"` and `'` to named entities.
///
/// Every character is escaped exactly once; entities already present in the
/// input are treated as literal text, so `&amp;` becomes `&amp;amp;`.
/// Borrows the input unchanged when nothing needs escaping.
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(raw);
    if escaped.contains('\'') {
        Cow::Owned(escaped.replace('\'', "&apos;"))
    } else {
        escaped
    }
}
