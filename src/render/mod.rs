//! Rendering: layout over an emitter, PDF output, and options.

mod emitter;
mod fonts;
mod json;
mod layout;
mod options;

pub use emitter::{Emitter, PdfEmitter};
pub use fonts::FontStyle;
pub use json::{to_json, JsonFormat};
pub use layout::{render_blocks, LayoutCursor};
pub use options::RenderOptions;

use crate::error::Result;
use crate::model::ContentBlock;

/// Render parsed blocks to PDF bytes.
pub fn to_pdf(blocks: &[ContentBlock], options: &RenderOptions) -> Result<Vec<u8>> {
    options.geometry.validate()?;
    let mut emitter = PdfEmitter::new(options);
    render_blocks(&mut emitter, blocks, &options.geometry, &options.theme);
    log::debug!("rendered {} pages", emitter.page_count());
    emitter.finish()
}
