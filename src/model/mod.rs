//! Document model types for the rendering pipeline.
//!
//! This module defines the intermediate representation that bridges
//! markup parsing and PDF layout: styled text runs, typed content
//! blocks, the color theme, and the page geometry.

mod block;
mod geometry;
mod theme;

pub use block::{BlockKind, ContentBlock, TextRun};
pub use geometry::PageGeometry;
pub(crate) use geometry::MM_TO_PT;
pub use theme::{Color, Theme};
