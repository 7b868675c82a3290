//! JSON dump of the parsed block model, for inspection and debugging.

use crate::error::Result;
use crate::model::ContentBlock;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Human-readable with indentation.
    #[default]
    Pretty,
    /// Single line, no extra whitespace.
    Compact,
}

/// Serialize parsed blocks to JSON.
pub fn to_json(blocks: &[ContentBlock], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(blocks)?,
        JsonFormat::Compact => serde_json::to_string(blocks)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_compact_json() {
        let blocks = vec![ContentBlock::paragraph(vec![TextRun::new("hi")], 0.0)];
        let json = to_json(&blocks, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"paragraph\""));
        assert!(json.contains("\"hi\""));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let blocks = vec![ContentBlock::heading(2, vec![TextRun::bold("B")], 0.0)];
        let json = to_json(&blocks, JsonFormat::Pretty).unwrap();
        let back: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blocks);
    }
}
