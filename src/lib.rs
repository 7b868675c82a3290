//! # mkpdf
//!
//! Render rich-text editor markup (a constrained HTML subset) or plain
//! text to a styled, paginated PDF.
//!
//! The pipeline is parse → model → layout → emit: the input string is
//! classified as markup or plain text, parsed into typed content blocks
//! (headings, paragraphs, list items, quotes, dividers) with styled
//! bold/italic runs, laid out onto A4 pages with word wrapping and
//! page-break tracking, and written out with the standard Times faces.
//!
//! ## Quick start
//!
//! ```
//! use mkpdf::render_content;
//!
//! let html = "<h1>Report</h1><p>Status: <strong>on track</strong>.</p>";
//! let pdf = render_content(html)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), mkpdf::Error>(())
//! ```
//!
//! ## Builder interface
//!
//! ```
//! use mkpdf::{Mkpdf, PageGeometry};
//!
//! let pdf = Mkpdf::new()
//!     .with_geometry(PageGeometry::letter())
//!     .with_title("Progress Report")
//!     .render("First line\nSecond line")?;
//! # Ok::<(), mkpdf::Error>(())
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

use std::fs;
use std::path::Path;

pub use detect::{detect_content, is_markup, ContentKind};
pub use error::{Error, Result};
pub use model::{BlockKind, Color, ContentBlock, PageGeometry, TextRun, Theme};
pub use parser::parse_content;
pub use render::{to_pdf, RenderOptions};

/// Render content to PDF bytes with default options.
pub fn render_content(content: &str) -> Result<Vec<u8>> {
    render_content_with_options(content, &RenderOptions::default())
}

/// Render content to PDF bytes with explicit options.
pub fn render_content_with_options(content: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let blocks = parse_content(content);
    render::to_pdf(&blocks, options)
}

/// Render content and write the PDF to `path`.
pub fn render_to_file(content: &str, path: impl AsRef<Path>) -> Result<()> {
    Mkpdf::new().render_to_file(content, path)
}

/// Configurable renderer.
///
/// Thin builder over [`RenderOptions`]; construct once, render many.
#[derive(Debug, Clone, Default)]
pub struct Mkpdf {
    options: RenderOptions,
}

impl Mkpdf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.options.geometry = geometry;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.options.author = Some(author.into());
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.options.compress = compress;
        self
    }

    /// Parse `content` and render it to PDF bytes.
    pub fn render(&self, content: &str) -> Result<Vec<u8>> {
        render_content_with_options(content, &self.options)
    }

    /// Parse `content` and write the PDF to `path`.
    pub fn render_to_file(&self, content: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(content)?;
        fs::write(path.as_ref(), bytes)?;
        log::info!("wrote {}", path.as_ref().display());
        Ok(())
    }
}
