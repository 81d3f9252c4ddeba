use crate::parsing::span::Span;

/// Byte cursor over one content span that reports absolute source offsets.
///
/// The parser only ever stops on ASCII delimiters, so every position it
/// slices at is a char boundary even though the cursor moves byte-wise.
#[derive(Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Source offset of `text[0]`.
    base: usize,
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, base: usize) -> Self {
        Self { text, base, at: 0 }
    }

    /// Absolute position in the source.
    pub fn pos(&self) -> usize {
        self.base + self.at
    }

    pub fn eof(&self) -> bool {
        self.at >= self.text.len()
    }

    fn rest(&self) -> &'a [u8] {
        self.text.as_bytes().get(self.at..).unwrap_or_default()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Moves forward `n` bytes, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.at = (self.at + n).min(self.text.len());
    }

    /// Moves to the next occurrence of `pat`, which may be at the current
    /// position. Returns `false` and moves to the end when there is none.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        if pat.is_empty() {
            return true;
        }
        match self.rest().windows(pat.len()).position(|w| w == pat) {
            Some(offset) => {
                self.at += offset;
                true
            }
            None => {
                self.at = self.text.len();
                false
            }
        }
    }

    /// Text under an absolute span that lies inside this cursor's input.
    pub fn slice(&self, sp: Span) -> &'a str {
        &self.text[sp.start - self.base..sp.end - self.base]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_absolute() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        cur.advance(2);
        assert_eq!(cur.pos(), 12);
        assert!(cur.starts_with(b"llo"));
    }

    #[test]
    fn advance_stops_at_end() {
        let mut cur = Cursor::new("ab", 0);
        cur.advance(5);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 2);
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn empty_input() {
        let cur = Cursor::new("", 7);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 7);
        assert!(!cur.starts_with(b"`"));
    }

    #[test]
    fn seek_finds_next_delimiter() {
        let mut cur = Cursor::new("**a** b**", 0);
        cur.advance(2);
        assert!(cur.seek(b"**"));
        assert_eq!(cur.pos(), 3);
        assert!(cur.seek(b"**"));
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn seek_without_match_moves_to_end() {
        let mut cur = Cursor::new("`open", 0);
        cur.advance(1);
        assert!(!cur.seek(b"`"));
        assert!(cur.eof());
    }

    #[test]
    fn slice_uses_absolute_offsets() {
        let cur = Cursor::new("say `hi`", 100);
        assert_eq!(cur.slice(Span { start: 105, end: 107 }), "hi");
    }
}
