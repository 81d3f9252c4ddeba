/// Emphasis inline type with owned delimiter constants.
///
/// A span closes at the first matching delimiter after its opener; nested
/// identical delimiters are not balanced. Double delimiters are tried before
/// single ones so `**bold**` is never split into two single-emphasis spans.
pub struct Emphasis;

impl Emphasis {
    /// Delimiters for strong emphasis, tried first.
    pub const STRONG: [&'static [u8]; 2] = [b"**", b"__"];
    /// Delimiters for regular emphasis.
    pub const SINGLE: [&'static [u8]; 2] = [b"*", b"_"];
}
