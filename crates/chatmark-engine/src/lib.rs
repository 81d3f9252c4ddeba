pub mod chat;
pub mod parsing;
mod render;

// Re-export key types for easier usage
pub use parsing::{CodeBlock, ParsedDoc, parse_document};
pub use render::{RenderOptions, render, render_with};
