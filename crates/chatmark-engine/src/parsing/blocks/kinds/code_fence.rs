use std::sync::LazyLock;

use regex::Regex;

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9+-]+$").expect("language tag pattern is valid"));

/// Fenced code block type with owned delimiter constants.
///
/// All fence syntax knowledge lives here: the delimiter, the info-line rules
/// and the fallback language.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Language used when a fence has no tag, or a tag we do not accept.
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Normalizes the info line of an opening fence into a language name.
    ///
    /// The tag is trimmed and lowercased; anything that is not a plain
    /// `[a-z0-9+-]` token falls back to [`CodeFence::DEFAULT_LANGUAGE`].
    pub fn language(info: &str) -> String {
        let tag = info.trim().to_lowercase();
        if tag.is_empty() {
            return Self::DEFAULT_LANGUAGE.to_string();
        }
        if !LANGUAGE_TAG.is_match(&tag) {
            log::debug!("unrecognized fence language {tag:?}, using {}", Self::DEFAULT_LANGUAGE);
            return Self::DEFAULT_LANGUAGE.to_string();
        }
        tag
    }

    /// Whether an info line can follow an opening fence.
    ///
    /// A backtick on the info line means the run of backticks continues, so the
    /// fence must open further along.
    pub fn is_info_line(info: &str) -> bool {
        !info.contains('`')
    }
}
