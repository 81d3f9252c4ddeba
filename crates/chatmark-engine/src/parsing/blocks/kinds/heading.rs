/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level that is recognized.
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line, returning `(level, content_offset)`.
    ///
    /// After optional leading spaces or tabs, the line must have 1 to 6 `#`
    /// characters followed by at least one space. Indentation is skipped the
    /// same way list markers skip it. `content_offset` is the byte index just
    /// past that space; the caller trims the remainder. Returns `None` when the
    /// remainder is blank.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let b = &line.as_bytes()[indent..];
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if b.get(level) != Some(&b' ') {
            return None;
        }
        let offset = indent + level + 1;
        if line[offset..].trim().is_empty() {
            return None;
        }
        u8::try_from(level).ok().map(|level| (level, offset))
    }
}
