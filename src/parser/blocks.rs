//! Block parsing: content string to an ordered block sequence.

use crate::detect::{detect_content, ContentKind};
use crate::model::{ContentBlock, TextRun};

use super::dom::{parse_markup, Element, Node};
use super::runs::{extract_run_groups, extract_runs};

/// Extra horizontal offset in mm applied to blockquotes and list items,
/// relative to their container's indent.
const INDENT_STEP: f32 = 8.0;

/// Parse content (editor markup or plain text) into content blocks.
///
/// Parsing is pure and deterministic, and never fails: unrecognized
/// structure degrades into plain containers or is skipped, per the
/// markup walker's recovery rules.
pub fn parse_content(content: &str) -> Vec<ContentBlock> {
    let blocks = match detect_content(content) {
        ContentKind::Markup => parse_markup_blocks(content),
        ContentKind::Plain => parse_plain_blocks(content),
    };
    log::debug!("parsed {} content blocks", blocks.len());
    blocks
}

/// Plain text: one paragraph block per line. Empty lines become blocks
/// with no runs, preserving the blank line through layout.
fn parse_plain_blocks(content: &str) -> Vec<ContentBlock> {
    content
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let runs = if line.is_empty() {
                Vec::new()
            } else {
                vec![TextRun::new(line)]
            };
            ContentBlock::paragraph(runs, 0.0)
        })
        .collect()
}

fn parse_markup_blocks(content: &str) -> Vec<ContentBlock> {
    let root = parse_markup(content);
    let mut blocks = Vec::new();
    visit_children(&root, 0.0, &mut blocks);
    blocks
}

/// Visit an element's children, emitting blocks for recognized tags and
/// recursing transparently into everything else.
fn visit_children(element: &Element, indent: f32, blocks: &mut Vec<ContentBlock>) {
    for child in &element.children {
        match child {
            Node::Text(text) => {
                // Stray text directly inside a container still renders,
                // so no visible text is ever dropped.
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    blocks.push(ContentBlock::paragraph(
                        vec![TextRun::new(trimmed)],
                        indent,
                    ));
                }
            }
            Node::Element(el) => visit_element(el, indent, blocks),
        }
    }
}

fn visit_element(el: &Element, indent: f32, blocks: &mut Vec<ContentBlock>) {
    match el.tag.as_str() {
        "h1" => blocks.push(ContentBlock::heading(1, extract_runs(el), indent)),
        "h2" => blocks.push(ContentBlock::heading(2, extract_runs(el), indent)),
        "h3" => blocks.push(ContentBlock::heading(3, extract_runs(el), indent)),
        "p" => {
            // Each explicit line break yields its own paragraph block,
            // one per visual line.
            let mut groups = extract_run_groups(el);
            if groups.len() > 1 && groups.last().is_some_and(|g| g.is_empty()) {
                // editors append an automatic <br> before </p>
                groups.pop();
            }
            for group in groups {
                blocks.push(ContentBlock::paragraph(group, indent));
            }
        }
        "blockquote" => {
            blocks.push(ContentBlock::quote(extract_runs(el), indent + INDENT_STEP));
        }
        "ul" | "ol" => {
            let ordered = el.tag == "ol";
            let mut number = 0u32;
            for child in &el.children {
                // only direct li children count; anything else is ignored
                let Node::Element(item) = child else { continue };
                if item.tag != "li" {
                    continue;
                }
                let list_index = if ordered {
                    number += 1;
                    number
                } else {
                    0
                };
                blocks.push(ContentBlock::list_item(
                    extract_runs(item),
                    indent + INDENT_STEP,
                    ordered,
                    list_index,
                ));
            }
        }
        "hr" | "br" => {
            if el.tag == "hr" {
                blocks.push(ContentBlock::divider(indent));
            }
        }
        // Unknown or unsupported tags are structurally transparent:
        // their children are visited at the same indent.
        _ => visit_children(el, indent, blocks),
    }
}
