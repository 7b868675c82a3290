//! Paginated layout engine.
//!
//! Consumes the parsed block sequence and drives an [`Emitter`],
//! measuring and wrapping text, tracking a vertical cursor in mm from
//! the page top, and inserting page breaks on overflow. The cursor is
//! explicit state threaded by `&mut` through every block routine.

use crate::model::{BlockKind, ContentBlock, PageGeometry, TextRun, Theme};

use super::emitter::Emitter;
use super::fonts::FontStyle;

const BODY_SIZE: f32 = 11.0;
const BODY_LINE_HEIGHT: f32 = 6.0;
const PARAGRAPH_GAP: f32 = 2.0;
const LIST_GAP: f32 = 1.0;
const QUOTE_RULE_OFFSET: f32 = 3.0;
const DIVIDER_GAP: f32 = 4.0;

/// Vertical write position and page counter for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Distance from the top of the current page, in mm.
    pub y: f32,
    /// 1-based page number.
    pub page: usize,
}

struct Ctx<'a> {
    geometry: &'a PageGeometry,
    theme: &'a Theme,
}

/// Lay out `blocks` onto the emitter's pages.
pub fn render_blocks<E: Emitter>(
    emitter: &mut E,
    blocks: &[ContentBlock],
    geometry: &PageGeometry,
    theme: &Theme,
) {
    let ctx = Ctx { geometry, theme };
    let mut cursor = LayoutCursor {
        y: geometry.margin_top,
        page: 1,
    };
    for block in blocks {
        match block.kind {
            BlockKind::Heading1 => render_heading(emitter, &ctx, &mut cursor, block, 1),
            BlockKind::Heading2 => render_heading(emitter, &ctx, &mut cursor, block, 2),
            BlockKind::Heading3 => render_heading(emitter, &ctx, &mut cursor, block, 3),
            BlockKind::Paragraph => render_paragraph(emitter, &ctx, &mut cursor, block),
            BlockKind::Blockquote => render_quote(emitter, &ctx, &mut cursor, block),
            BlockKind::ListItem => render_list_item(emitter, &ctx, &mut cursor, block),
            BlockKind::Divider => render_divider(emitter, &ctx, &mut cursor, block),
        }
    }
    log::debug!(
        "laid out {} blocks across {} pages",
        blocks.len(),
        cursor.page
    );
}

/// Breaks the page if `needed` mm no longer fit above the bottom margin.
/// Called before every emitted line, so no line is clipped at a page
/// boundary.
fn ensure_space<E: Emitter>(emitter: &mut E, ctx: &Ctx, cursor: &mut LayoutCursor, needed: f32) {
    if cursor.y + needed > ctx.geometry.bottom_limit() {
        emitter.add_page();
        cursor.page += 1;
        cursor.y = ctx.geometry.margin_top;
    }
}

/// Advance the cursor by one line and write `text` with its baseline at
/// the new position.
fn write_line<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    text: &str,
    x: f32,
    line_height: f32,
) {
    ensure_space(emitter, ctx, cursor, line_height);
    cursor.y += line_height;
    emitter.text(text, x, cursor.y);
}

fn render_heading<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    block: &ContentBlock,
    level: u8,
) {
    let (size, line_height, space_before, space_after) = match level {
        1 => (18.0, 9.0, 5.0, 3.0),
        2 => (15.0, 8.0, 4.0, 2.0),
        _ => (13.0, 7.0, 3.0, 2.0),
    };
    cursor.y += space_before;

    let x = ctx.geometry.margin_left + block.indent;
    let available = ctx.geometry.printable_width() - block.indent;
    emitter.set_font(FontStyle::Bold, size);
    emitter.set_text_color(ctx.theme.primary);

    let text = block.plain_text();
    let lines = emitter.split_to_width(&text, available);
    for (index, line) in lines.iter().enumerate() {
        write_line(emitter, ctx, cursor, line, x, line_height);
        if level == 1 && index == 0 && !line.is_empty() {
            let width = emitter.text_width(line);
            emitter.set_draw_color(ctx.theme.accent);
            emitter.set_line_width(0.5);
            emitter.line(x, cursor.y + 1.5, x + width, cursor.y + 1.5);
        }
    }
    cursor.y += space_after;
}

fn render_paragraph<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    block: &ContentBlock,
) {
    // blocks with no runs stand for blank lines
    if block.runs.is_empty() {
        cursor.y += BODY_LINE_HEIGHT;
        return;
    }

    let x = ctx.geometry.margin_left + block.indent;
    let available = ctx.geometry.printable_width() - block.indent;
    emitter.set_text_color(ctx.theme.foreground);

    if block.has_styled_runs() {
        render_mixed_runs(emitter, ctx, cursor, &block.runs, x, available);
    } else {
        emitter.set_font(FontStyle::Regular, BODY_SIZE);
        let text = block.plain_text();
        for line in emitter.split_to_width(&text, available) {
            write_line(emitter, ctx, cursor, &line, x, BODY_LINE_HEIGHT);
        }
    }
    cursor.y += PARAGRAPH_GAP;
}

/// A word with its trailing whitespace and the style of the run it came
/// from. Exists only while packing mixed-style lines.
#[derive(Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    style: FontStyle,
}

fn tokenize(runs: &[TextRun]) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for run in runs {
        let style = FontStyle::with_flags(run.bold, run.italic);
        let text = run.text.as_str();
        let mut start = 0;
        let mut prev_was_space = false;
        let mut seen_word = false;
        for (offset, c) in text.char_indices() {
            let is_space = c.is_whitespace();
            // break at each whitespace-to-word boundary, so trailing
            // whitespace stays attached to the word before it; run-initial
            // whitespace rides along with the first word instead
            if prev_was_space && !is_space && seen_word {
                tokens.push(Token {
                    text: &text[start..offset],
                    style,
                });
                start = offset;
                seen_word = false;
            }
            if !is_space {
                seen_word = true;
            }
            prev_was_space = is_space;
        }
        if start < text.len() {
            tokens.push(Token {
                text: &text[start..],
                style,
            });
        }
    }
    tokens
}

/// Greedy packing of styled tokens onto lines. Each line takes tokens
/// while their accumulated measured width fits; on flush, every token is
/// drawn with its own face and the x position advances by its measured
/// width.
fn render_mixed_runs<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    runs: &[TextRun],
    x: f32,
    available: f32,
) {
    let tokens = tokenize(runs);
    let mut line: Vec<(Token, f32)> = Vec::new();
    let mut line_width = 0.0;

    for token in tokens {
        emitter.set_font(token.style, BODY_SIZE);
        let width = emitter.text_width(token.text);
        if !line.is_empty() && line_width + width > available {
            flush_line(emitter, ctx, cursor, &line, x);
            line.clear();
            line_width = 0.0;
        }
        line.push((token, width));
        line_width += width;
    }
    if !line.is_empty() {
        flush_line(emitter, ctx, cursor, &line, x);
    }
}

fn flush_line<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    line: &[(Token, f32)],
    x: f32,
) {
    ensure_space(emitter, ctx, cursor, BODY_LINE_HEIGHT);
    cursor.y += BODY_LINE_HEIGHT;
    let mut pen = x;
    for (token, width) in line {
        emitter.set_font(token.style, BODY_SIZE);
        emitter.text(token.text, pen, cursor.y);
        pen += width;
    }
}

fn render_quote<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    block: &ContentBlock,
) {
    let x = ctx.geometry.margin_left + block.indent;
    let available = ctx.geometry.printable_width() - block.indent;
    emitter.set_font(FontStyle::Italic, BODY_SIZE);
    emitter.set_text_color(ctx.theme.muted);

    let top = cursor.y;
    let start_page = cursor.page;
    let text = block.plain_text();
    for line in emitter.split_to_width(&text, available) {
        write_line(emitter, ctx, cursor, &line, x, BODY_LINE_HEIGHT);
    }

    // vertical accent rule along the quote, from the cursor captured
    // before and after; when the quote crossed a page break the rule is
    // drawn on the ending page from the top margin
    let rule_top = if cursor.page > start_page {
        ctx.geometry.margin_top
    } else {
        top
    };
    if cursor.y > rule_top {
        let rule_x = x - QUOTE_RULE_OFFSET;
        emitter.set_draw_color(ctx.theme.accent);
        emitter.set_line_width(0.8);
        emitter.line(rule_x, rule_top + 1.0, rule_x, cursor.y + 1.0);
    }
    cursor.y += PARAGRAPH_GAP;
}

fn render_list_item<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    block: &ContentBlock,
) {
    let marker = if block.ordered {
        format!("{}. ", block.list_index)
    } else {
        "\u{2022} ".to_string()
    };
    emitter.set_font(FontStyle::Regular, BODY_SIZE);
    emitter.set_text_color(ctx.theme.foreground);

    let marker_x = ctx.geometry.margin_left + block.indent;
    let marker_width = emitter.text_width(&marker);
    let text_x = marker_x + marker_width;
    let available = ctx.geometry.printable_width() - block.indent - marker_width;

    let text = block.plain_text();
    for (index, line) in emitter.split_to_width(&text, available).iter().enumerate() {
        write_line(emitter, ctx, cursor, line, text_x, BODY_LINE_HEIGHT);
        if index == 0 {
            // marker shares the first line's baseline
            emitter.text(&marker, marker_x, cursor.y);
        }
    }
    cursor.y += LIST_GAP;
}

fn render_divider<E: Emitter>(
    emitter: &mut E,
    ctx: &Ctx,
    cursor: &mut LayoutCursor,
    block: &ContentBlock,
) {
    cursor.y += DIVIDER_GAP;
    ensure_space(emitter, ctx, cursor, 1.0);
    let x1 = ctx.geometry.margin_left + block.indent;
    let x2 = ctx.geometry.width - ctx.geometry.margin_right;
    emitter.set_draw_color(ctx.theme.border);
    emitter.set_line_width(0.4);
    emitter.line(x1, cursor.y, x2, cursor.y);
    cursor.y += DIVIDER_GAP;
}
