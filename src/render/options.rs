//! Rendering options.

use crate::model::{PageGeometry, Theme};

/// Options controlling PDF output.
///
/// # Example
/// ```
/// use mkpdf::render::RenderOptions;
/// use mkpdf::model::PageGeometry;
///
/// let options = RenderOptions::new()
///     .with_geometry(PageGeometry::letter())
///     .with_title("Progress Report");
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size and margins.
    pub geometry: PageGeometry,
    /// Color theme applied to headings, rules, and body text.
    pub theme: Theme,
    /// Document title written to the info dictionary.
    pub title: Option<String>,
    /// Document author written to the info dictionary.
    pub author: Option<String>,
    /// Flate-compress content streams.
    pub compress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            theme: Theme::default(),
            title: None,
            author: None,
            compress: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
