//! Page geometry: size and margins in millimetres.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Millimetres per PDF point conversion factor (1 pt = 1/72 inch).
pub(crate) const MM_TO_PT: f32 = 72.0 / 25.4;

/// The page size and margins defining the printable area.
///
/// All values are millimetres measured from the top-left corner, the
/// convention the layout engine works in; conversion to PDF points
/// happens at the emitter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in mm
    pub width: f32,
    /// Page height in mm
    pub height: f32,
    /// Top margin in mm
    pub margin_top: f32,
    /// Right margin in mm
    pub margin_right: f32,
    /// Bottom margin in mm
    pub margin_bottom: f32,
    /// Left margin in mm
    pub margin_left: f32,
}

impl PageGeometry {
    /// A4 portrait (210 × 297 mm) with 15 mm margins.
    pub fn a4() -> Self {
        Self::new(210.0, 297.0, 15.0)
    }

    /// US Letter portrait (215.9 × 279.4 mm) with 15 mm margins.
    pub fn letter() -> Self {
        Self::new(215.9, 279.4, 15.0)
    }

    /// Create a geometry with a uniform margin.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin_top: margin,
            margin_right: margin,
            margin_bottom: margin,
            margin_left: margin,
        }
    }

    /// Replace all four margins with a uniform value.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self.margin_right = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self
    }

    /// Horizontal space available for text.
    pub fn printable_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Vertical space available for text.
    pub fn printable_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// The y coordinate past which a line no longer fits.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin_bottom
    }

    /// Check that the geometry leaves a usable printable area.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(Error::InvalidGeometry("non-finite page size".into()));
        }
        if self.printable_width() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "printable width is {:.1} mm",
                self.printable_width()
            )));
        }
        if self.printable_height() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "printable height is {:.1} mm",
                self.printable_height()
            )));
        }
        Ok(())
    }

    /// Page dimensions in PDF points as (width, height).
    pub fn size_in_points(&self) -> (f32, f32) {
        (self.width * MM_TO_PT, self.height * MM_TO_PT)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
