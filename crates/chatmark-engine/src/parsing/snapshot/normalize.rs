use crate::parsing::{
    ParsedDoc,
    blocks::{BlockKind, BlockNode, kinds::ListKind},
    fences::CodeBlock,
    span::preview,
};

/// Snapshot of a parsed document for `insta::assert_debug_snapshot!`.
#[derive(Debug)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
    /// Extracted code blocks.
    pub code_blocks: Vec<CodeSnap>,
}

/// Snapshot of a single block.
#[derive(Debug)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Paragraph", "Heading(2)", "List(Ordered)").
    pub kind: String,
    /// Byte span as (start, end) tuple.
    pub span: (usize, usize),
    /// Preview of each content line, or the placeholder for code blocks.
    pub lines: Vec<String>,
}

/// Snapshot of a single code block record.
#[derive(Debug)]
pub struct CodeSnap {
    pub placeholder: String,
    pub language: String,
    pub content: String,
}

pub fn normalize(source: &str, doc: &ParsedDoc) -> Snap {
    Snap {
        blocks: doc
            .blocks
            .iter()
            .map(|b| block_snap(source, doc, b))
            .collect(),
        code_blocks: doc.code_blocks.iter().map(code_snap).collect(),
    }
}

fn block_snap(source: &str, doc: &ParsedDoc, b: &BlockNode) -> BlockSnap {
    let kind = match b.kind {
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::List {
            kind: ListKind::Unordered,
        } => "List(Unordered)".to_string(),
        BlockKind::List {
            kind: ListKind::Ordered,
        } => "List(Ordered)".to_string(),
        BlockKind::Paragraph => "Paragraph".to_string(),
        BlockKind::Code { .. } => "Code".to_string(),
    };

    let lines = match b.kind {
        BlockKind::Code { index } => doc
            .code_blocks
            .get(index)
            .map(CodeBlock::placeholder)
            .into_iter()
            .collect(),
        _ => b.lines.iter().map(|sp| preview(source, *sp, 60)).collect(),
    };

    BlockSnap {
        kind,
        span: (b.span.start, b.span.end),
        lines,
    }
}

fn code_snap(code: &CodeBlock) -> CodeSnap {
    CodeSnap {
        placeholder: code.placeholder(),
        language: code.language.clone(),
        content: code.content.clone(),
    }
}
