//! Base-14 Times font selection, WinAnsi encoding, and approximate metrics.
//!
//! The four standard Times faces ship with every PDF viewer, so the
//! output embeds no font programs. Widths are approximated from the
//! Times-Roman metrics in coarse buckets, which is accurate enough for
//! line breaking at body sizes.

use unicode_normalization::UnicodeNormalization;

/// One of the four standard Times faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn with_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontStyle::Regular,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }

    /// Resource name used in page font dictionaries.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Italic => "F3",
            FontStyle::BoldItalic => "F4",
        }
    }

    /// PostScript base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Times-Roman",
            FontStyle::Bold => "Times-Bold",
            FontStyle::Italic => "Times-Italic",
            FontStyle::BoldItalic => "Times-BoldItalic",
        }
    }

    pub fn all() -> [FontStyle; 4] {
        [
            FontStyle::Regular,
            FontStyle::Bold,
            FontStyle::Italic,
            FontStyle::BoldItalic,
        ]
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle::Regular
    }
}

/// Map a character to its WinAnsi code point, if representable.
fn to_winansi(c: char) -> Option<u8> {
    let cp = c as u32;
    match cp {
        0x20..=0x7E => Some(cp as u8),
        0xA0..=0xFF => Some(cp as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Encode text as WinAnsi bytes, NFC-normalizing first so composed and
/// decomposed accents encode identically. Characters outside the
/// encoding are replaced with '?'.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.nfc()
        .map(|c| to_winansi(c).unwrap_or(b'?'))
        .collect()
}

/// Approximate advance width of one character in 1/1000 em units.
fn char_units(style: FontStyle, c: char) -> f32 {
    let bold = matches!(style, FontStyle::Bold | FontStyle::BoldItalic);
    let units = match c {
        ' ' | '\u{A0}' => 250.0,
        'i' | 'j' | 'l' | '.' | ',' | ';' | ':' | '\'' | '|' | '!' => 278.0,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' => 333.0,
        'I' => 333.0,
        'J' => 389.0,
        'm' => 778.0,
        'w' => 722.0,
        'M' => 889.0,
        'W' => 944.0,
        'A'..='Z' => 700.0,
        '0'..='9' => 500.0,
        '–' => 500.0,
        '—' => 1000.0,
        '•' => 350.0,
        _ if c.is_lowercase() => 480.0,
        _ => 500.0,
    };
    // bold faces run a few percent wider
    if bold {
        units * 1.05
    } else {
        units
    }
}

/// Sum of advance widths for a string, in 1/1000 em units. Multiply by
/// the font size to get points.
pub fn string_units(style: FontStyle, text: &str) -> f32 {
    text.nfc().map(|c| char_units(style, c)).sum()
}
