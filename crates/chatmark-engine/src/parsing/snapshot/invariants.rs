use crate::parsing::{ParsedDoc, blocks::BlockKind};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block and line spans are within source bounds
/// - Blocks appear in source order without overlapping
/// - Code block indices count up from 0
/// - Every code block is referenced by exactly one block
/// - Non-code blocks have at least one non-empty content line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &ParsedDoc) {
    let n = source.len();
    let mut prev_end = 0usize;
    let mut code_refs = vec![0usize; doc.code_blocks.len()];

    for b in &doc.blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block out of order or overlapping: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        for line in &b.lines {
            assert!(
                line.start >= b.span.start && line.end <= b.span.end,
                "content span not contained in block span: content {:?}, block {:?}",
                line,
                b.span
            );
        }

        match b.kind {
            BlockKind::Code { index } => {
                assert!(
                    index < code_refs.len(),
                    "code block {index} referenced but not extracted"
                );
                code_refs[index] += 1;
            }
            _ => assert!(
                !b.lines.is_empty() && b.lines.iter().all(|l| !l.is_empty()),
                "empty content in block {:?}",
                b.span
            ),
        }
    }

    for (i, code) in doc.code_blocks.iter().enumerate() {
        assert_eq!(code.index, i, "code block indices must count up from 0");
        assert_eq!(
            code_refs[i], 1,
            "code block {i} referenced {} times",
            code_refs[i]
        );
    }
}
