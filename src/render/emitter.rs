//! Drawing surface abstraction and the PDF backend.
//!
//! Layout talks to an [`Emitter`] in millimetres measured from the
//! top-left page corner. The PDF backend converts to points and flips
//! the y axis only at the moment an operator is written, so layout code
//! never sees PDF coordinates.

use std::io::Write as _;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Date, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Result;
use crate::model::{Color, PageGeometry, MM_TO_PT};

use super::fonts::{encode_winansi, string_units, FontStyle};
use super::options::RenderOptions;

/// A paginated drawing surface.
///
/// All coordinates are millimetres from the top-left corner of the
/// current page. Implementations carry the current font, text color,
/// draw color, and line width as state.
pub trait Emitter {
    /// Select the active face and size (points) for subsequent text.
    fn set_font(&mut self, style: FontStyle, size: f32);

    /// Set the fill color for subsequent text.
    fn set_text_color(&mut self, color: Color);

    /// Set the stroke color for subsequent lines.
    fn set_draw_color(&mut self, color: Color);

    /// Set the stroke width in millimetres.
    fn set_line_width(&mut self, width: f32);

    /// Measured width of `text` in mm at the current font.
    fn text_width(&self, text: &str) -> f32;

    /// Draw `text` with its baseline at `(x, y)`.
    fn text(&mut self, text: &str, x: f32, y: f32);

    /// Stroke a straight line from `(x1, y1)` to `(x2, y2)`.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Start a new page; subsequent operations land on it.
    fn add_page(&mut self);

    /// Number of pages emitted so far (at least 1).
    fn page_count(&self) -> usize;

    /// Break `text` into lines no wider than `max_width` mm at the
    /// current font. Greedy: each line takes as many whitespace-separated
    /// words as fit. A single word wider than the limit is kept whole on
    /// its own line. Embedded newlines force breaks, and blank segments
    /// are preserved as empty lines.
    fn split_to_width(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for segment in text.split('\n') {
            if segment.trim().is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for word in segment.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                    continue;
                }
                let candidate = format!("{current} {word}");
                if self.text_width(&candidate) <= max_width {
                    current = candidate;
                } else {
                    lines.push(current);
                    current = word.to_string();
                }
            }
            lines.push(current);
        }
        lines
    }
}

/// PDF backend over `pdf-writer`, using the four standard Times faces
/// with WinAnsi encoding.
pub struct PdfEmitter {
    geometry: PageGeometry,
    compress: bool,
    title: Option<String>,
    author: Option<String>,
    pages: Vec<Content>,
    font: FontStyle,
    font_size: f32,
    text_color: Color,
    draw_color: Color,
    line_width: f32,
}

impl PdfEmitter {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            geometry: options.geometry,
            compress: options.compress,
            title: options.title.clone(),
            author: options.author.clone(),
            pages: vec![Content::new()],
            font: FontStyle::Regular,
            font_size: 11.0,
            text_color: Color::black(),
            draw_color: Color::black(),
            line_width: 0.2,
        }
    }

    fn x_pt(&self, x: f32) -> f32 {
        x * MM_TO_PT
    }

    fn y_pt(&self, y: f32) -> f32 {
        (self.geometry.height - y) * MM_TO_PT
    }

    fn content(&mut self) -> &mut Content {
        // pages is never empty
        self.pages.last_mut().unwrap()
    }

    /// Serialize the document and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();
        let mut next = 1;
        let mut alloc = || {
            let id = Ref::new(next);
            next += 1;
            id
        };

        let catalog_id = alloc();
        let page_tree_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<Ref> = FontStyle::all().iter().map(|_| alloc()).collect();
        let page_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        for (style, id) in FontStyle::all().iter().zip(&font_ids) {
            pdf.type1_font(*id)
                .base_font(Name(style.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let (width_pt, height_pt) = self.geometry.size_in_points();
        for ((page_id, content_id), content) in
            page_ids.iter().zip(&content_ids).zip(self.pages)
        {
            let mut page = pdf.page(*page_id);
            page.parent(page_tree_id)
                .media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
                .contents(*content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (style, font_id) in FontStyle::all().iter().zip(&font_ids) {
                fonts.pair(Name(style.resource_name().as_bytes()), *font_id);
            }
            fonts.finish();
            resources.finish();
            page.finish();

            let data = content.finish();
            if self.compress {
                let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&data)?;
                let compressed = encoder.finish()?;
                pdf.stream(*content_id, &compressed).filter(Filter::FlateDecode);
            } else {
                pdf.stream(*content_id, &data);
            }
        }

        let mut info = pdf.document_info(info_id);
        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        info.producer(TextStr("mkpdf"));
        info.creation_date(local_date());
        info.finish();

        Ok(pdf.finish())
    }
}

impl Emitter for PdfEmitter {
    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.font = style;
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn text_width(&self, text: &str) -> f32 {
        let points = string_units(self.font, text) / 1000.0 * self.font_size;
        points / MM_TO_PT
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        if text.is_empty() {
            return;
        }
        let font = self.font;
        let size = self.font_size;
        let (r, g, b) = self.text_color.to_normalized();
        let x_pt = self.x_pt(x);
        let y_pt = self.y_pt(y);
        let bytes = encode_winansi(text);

        let content = self.content();
        content.begin_text();
        content.set_font(Name(font.resource_name().as_bytes()), size);
        content.set_fill_rgb(r, g, b);
        content.next_line(x_pt, y_pt);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (r, g, b) = self.draw_color.to_normalized();
        let width_pt = self.line_width * MM_TO_PT;
        let (ax, ay) = (self.x_pt(x1), self.y_pt(y1));
        let (bx, by) = (self.x_pt(x2), self.y_pt(y2));

        let content = self.content();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(width_pt);
        content.set_line_cap(LineCapStyle::ButtCap);
        content.move_to(ax, ay);
        content.line_to(bx, by);
        content.stroke();
    }

    fn add_page(&mut self) {
        self.pages.push(Content::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn local_date() -> Date {
    use chrono::{Datelike, Timelike};
    let now = chrono::Local::now();
    Date::new(now.year().clamp(0, 9999) as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
}
