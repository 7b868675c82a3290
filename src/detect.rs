//! Content kind detection: editor markup vs plain text.
//!
//! Rich-text editors hand us an HTML fragment; other callers hand us
//! plain text with `\n` separators. The two take different parsing
//! paths, decided by a pattern match for the editor's tag set.

use std::sync::OnceLock;

use regex::Regex;

/// The kind of content handed to [`parse_content`](crate::parse_content).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// An HTML fragment from the rich-text editor.
    Markup,
    /// Plain text with newline separators.
    Plain,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Markup => write!(f, "markup"),
            ContentKind::Plain => write!(f, "plain text"),
        }
    }
}

/// Tags whose presence marks the content as editor markup.
///
/// This is deliberately the block-level subset the editor emits; inline
/// tags (`strong`, `em`) alone do not flip a plain-text document into
/// the markup path.
const MARKUP_TAG_PATTERN: &str = r"(?i)</?(p|h[1-6]|ul|ol|li|blockquote|br)\b";

fn markup_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MARKUP_TAG_PATTERN).unwrap())
}

/// Detect whether content is editor markup or plain text.
pub fn detect_content(content: &str) -> ContentKind {
    if markup_tag_regex().is_match(content) {
        ContentKind::Markup
    } else {
        ContentKind::Plain
    }
}

/// Check whether content contains any of the recognized markup tags.
pub fn is_markup(content: &str) -> bool {
    detect_content(content) == ContentKind::Markup
}
