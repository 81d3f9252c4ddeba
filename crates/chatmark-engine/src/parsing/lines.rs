use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (includes the newline if present).
    pub span: Span,
    /// The line text, borrowed from the source.
    pub text: &'a str,
}

/// Returns an iterator over the lines inside `within`, with absolute byte spans.
///
/// Newline characters are kept on each line so that consecutive spans tile
/// the region exactly.
pub fn lines_with_spans(source: &str, within: Span) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = within.start;
    within.slice(source).split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            span: Span { start, end: offset },
            text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str, within: Span) -> Vec<(Span, &str)> {
        lines_with_spans(source, within)
            .map(|lr| (lr.span, lr.text))
            .collect()
    }

    #[test]
    fn spans_tile_the_region() {
        let src = "one\ntwo\nthree";
        let lines = collect(
            src,
            Span {
                start: 0,
                end: src.len(),
            },
        );
        assert_eq!(
            lines,
            vec![
                (Span { start: 0, end: 4 }, "one\n"),
                (Span { start: 4, end: 8 }, "two\n"),
                (Span { start: 8, end: 13 }, "three"),
            ]
        );
    }

    #[test]
    fn offsets_are_absolute_for_sub_regions() {
        let src = "skip\nkeep\nme";
        let lines = collect(src, Span { start: 5, end: 12 });
        assert_eq!(
            lines,
            vec![
                (Span { start: 5, end: 10 }, "keep\n"),
                (Span { start: 10, end: 12 }, "me"),
            ]
        );
    }

    #[test]
    fn empty_region_has_no_lines() {
        assert!(collect("abc", Span { start: 1, end: 1 }).is_empty());
    }
}
