//! The fixed five-color theme applied by the layout engine.

use serde::{Deserialize, Serialize};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Components normalized to the 0.0–1.0 range used by PDF operators.
    pub fn to_normalized(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// The document palette.
///
/// The defaults match the application's export styling; callers may
/// substitute their own palette through
/// [`RenderOptions`](crate::render::RenderOptions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Heading color
    pub primary: Color,
    /// Heading underline and blockquote rule color
    pub accent: Color,
    /// Body text color
    pub foreground: Color,
    /// Blockquote text color
    pub muted: Color,
    /// Divider rule color
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::new(30, 58, 95),
            accent: Color::new(217, 119, 6),
            foreground: Color::new(17, 24, 39),
            muted: Color::new(107, 114, 128),
            border: Color::new(209, 213, 219),
        }
    }
}
