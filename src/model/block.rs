//! Block and text-run types.

use serde::{Deserialize, Serialize};

/// A maximal span of text sharing one bold/italic combination.
///
/// Runs are never split across a style boundary: the extractor merges
/// adjacent text with identical flags into a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextRun {
    /// Create a new unstyled text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a run with explicit style flags.
    pub fn styled(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, true, false)
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(text, false, true)
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this run carries any styling.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Top-level heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Third-level heading
    Heading3,
    /// Body paragraph (one visual line; explicit breaks split paragraphs)
    Paragraph,
    /// Bulleted or numbered list item
    ListItem,
    /// Quoted passage
    Blockquote,
    /// Horizontal rule
    Divider,
}

/// One unit of document structure, laid out independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block kind
    pub kind: BlockKind,

    /// Styled text runs in source order (empty for dividers and blank lines)
    pub runs: Vec<TextRun>,

    /// Accumulated horizontal offset in mm (quotes and list items add to it)
    pub indent: f32,

    /// Whether this list item belongs to an ordered list
    pub ordered: bool,

    /// 1-based position within an ordered list; 0 for unordered items
    /// and non-list blocks
    pub list_index: u32,
}

impl ContentBlock {
    /// Create a block of the given kind with no runs.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            runs: Vec::new(),
            indent: 0.0,
            ordered: false,
            list_index: 0,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(runs: Vec<TextRun>, indent: f32) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            runs,
            indent,
            ordered: false,
            list_index: 0,
        }
    }

    /// Create a heading block; `level` is clamped to 1–3.
    pub fn heading(level: u8, runs: Vec<TextRun>, indent: f32) -> Self {
        let kind = match level {
            0 | 1 => BlockKind::Heading1,
            2 => BlockKind::Heading2,
            _ => BlockKind::Heading3,
        };
        Self {
            kind,
            runs,
            indent,
            ordered: false,
            list_index: 0,
        }
    }

    /// Create a blockquote block.
    pub fn quote(runs: Vec<TextRun>, indent: f32) -> Self {
        Self {
            kind: BlockKind::Blockquote,
            runs,
            indent,
            ordered: false,
            list_index: 0,
        }
    }

    /// Create a list-item block. `list_index` is 1-based for ordered
    /// lists and 0 for unordered ones.
    pub fn list_item(runs: Vec<TextRun>, indent: f32, ordered: bool, list_index: u32) -> Self {
        Self {
            kind: BlockKind::ListItem,
            runs,
            indent,
            ordered,
            list_index,
        }
    }

    /// Create a divider block.
    pub fn divider(indent: f32) -> Self {
        Self {
            kind: BlockKind::Divider,
            runs: Vec::new(),
            indent,
            ordered: false,
            list_index: 0,
        }
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check whether any run carries bold or italic styling.
    pub fn has_styled_runs(&self) -> bool {
        self.runs.iter().any(|r| r.has_styling())
    }

    /// Check if this is a heading block.
    pub fn is_heading(&self) -> bool {
        matches!(
            self.kind,
            BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_constructors() {
        let run = TextRun::new("plain");
        assert!(!run.has_styling());

        let run = TextRun::bold("b");
        assert!(run.bold && !run.italic);

        let run = TextRun::italic("i");
        assert!(!run.bold && run.italic);

        let run = TextRun::styled("bi", true, true);
        assert!(run.bold && run.italic);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(ContentBlock::heading(1, vec![], 0.0).kind, BlockKind::Heading1);
        assert_eq!(ContentBlock::heading(2, vec![], 0.0).kind, BlockKind::Heading2);
        assert_eq!(ContentBlock::heading(3, vec![], 0.0).kind, BlockKind::Heading3);
        assert!(ContentBlock::heading(1, vec![], 0.0).is_heading());
    }

    #[test]
    fn test_plain_text() {
        let block = ContentBlock::paragraph(
            vec![TextRun::new("Body "), TextRun::bold("bold"), TextRun::new(" text.")],
            0.0,
        );
        assert_eq!(block.plain_text(), "Body bold text.");
        assert!(block.has_styled_runs());
    }

    #[test]
    fn test_divider_has_no_runs() {
        let block = ContentBlock::divider(0.0);
        assert!(block.runs.is_empty());
        assert_eq!(block.kind, BlockKind::Divider);
    }

    #[test]
    fn test_list_item() {
        let item = ContentBlock::list_item(vec![TextRun::new("One")], 8.0, true, 1);
        assert!(item.ordered);
        assert_eq!(item.list_index, 1);
        assert_eq!(item.indent, 8.0);
    }
}
