/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// List item block type with owned marker constants.
///
/// Only flat lists are supported. Leading indentation before a marker is
/// ignored, so indented items join the surrounding list.
pub struct ListItem;

impl ListItem {
    /// Markers that open an unordered item when followed by a space.
    pub const BULLETS: [u8; 3] = [b'*', b'+', b'-'];
    /// Terminator after the digits of an ordered item.
    pub const ORDERED_DELIMITER: u8 = b'.';

    /// Parses a list item line, returning `(kind, content_offset)`.
    ///
    /// `content_offset` is the byte index just past the marker and its
    /// following space. Returns `None` when the item has no content.
    pub fn parse(line: &str) -> Option<(ListKind, usize)> {
        let (kind, offset) = Self::marker(line)?;
        if line[offset..].trim().is_empty() {
            return None;
        }
        Some((kind, offset))
    }

    fn marker(line: &str) -> Option<(ListKind, usize)> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let b = &line.as_bytes()[indent..];

        if let [marker, b' ', ..] = b
            && Self::BULLETS.contains(marker)
        {
            return Some((ListKind::Unordered, indent + 2));
        }

        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0
            && b.get(digits) == Some(&Self::ORDERED_DELIMITER)
            && b.get(digits + 1) == Some(&b' ')
        {
            return Some((ListKind::Ordered, indent + digits + 2));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- item", Some((ListKind::Unordered, 2)))]
    #[case("* item", Some((ListKind::Unordered, 2)))]
    #[case("+ item", Some((ListKind::Unordered, 2)))]
    #[case("  - nested", Some((ListKind::Unordered, 4)))]
    #[case("1. first", Some((ListKind::Ordered, 3)))]
    #[case("42. answer", Some((ListKind::Ordered, 4)))]
    #[case("-item", None)]
    #[case("*emphasis*", None)]
    #[case("**bold** text", None)]
    #[case("1.5 is a number", None)]
    #[case("1) paren", None)]
    #[case("- ", None)]
    #[case("1.   ", None)]
    #[case("", None)]
    fn parses_list_lines(#[case] line: &str, #[case] expected: Option<(ListKind, usize)>) {
        assert_eq!(ListItem::parse(line), expected);
    }
}
