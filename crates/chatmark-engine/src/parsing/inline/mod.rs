//! # Inline Parsing
//!
//! Parses one heading, list item or paragraph line at a time, so nothing
//! inline ever spans two lines.
//!
//! Order of attempts at each position: a backtick code span, then `**`/`__`,
//! then `*`/`_`. A code span is a raw zone, so `` `**x**` `` stays literal
//! code. Emphasis content is parsed again for nested markup. A delimiter
//! with nothing before its closer is left as text.
//!
//! `Cursor` (in `cursor`) tracks absolute offsets; `parser` holds the
//! `try_parse_*` helpers and `kinds` the delimiter constants.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
