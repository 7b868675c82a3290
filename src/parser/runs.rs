//! Styled-run extraction from the markup tree.
//!
//! Bold and italic flags accumulate down the tree (`strong`/`b` and
//! `em`/`i`); they are threaded through the recursion as parameters so
//! sibling subtrees cannot leak style into each other, and they are
//! never cleared by a descendant. Adjacent text with identical flags is
//! merged, so every run is maximal for its style combination.

use crate::model::TextRun;

use super::dom::{Element, Node};

/// Extract the flat run sequence of an element, ignoring line breaks.
///
/// Concatenating the returned runs' text reproduces the element's
/// complete visible text in document order.
pub fn extract_runs(element: &Element) -> Vec<TextRun> {
    let mut groups = extract_run_groups(element);
    if groups.len() <= 1 {
        return groups.pop().unwrap_or_default();
    }
    // Re-merge across group boundaries so runs stay maximal.
    let mut runs: Vec<TextRun> = Vec::new();
    for group in groups {
        for run in group {
            push_run(&mut runs, run.text, run.bold, run.italic);
        }
    }
    runs
}

/// Extract runs grouped by explicit line breaks.
///
/// Every `br` element starts a new group; a break at the very start (or
/// several in a row) yields empty groups, preserving blank lines.
pub fn extract_run_groups(element: &Element) -> Vec<Vec<TextRun>> {
    let mut groups: Vec<Vec<TextRun>> = vec![Vec::new()];
    walk(element, false, false, &mut groups);
    groups
}

fn walk(element: &Element, bold: bool, italic: bool, groups: &mut Vec<Vec<TextRun>>) {
    for child in &element.children {
        match child {
            Node::Text(text) => {
                let group = groups.last_mut().expect("at least one group");
                push_run(group, text.clone(), bold, italic);
            }
            Node::Element(el) => match el.tag.as_str() {
                "br" => groups.push(Vec::new()),
                "strong" | "b" => walk(el, true, italic, groups),
                "em" | "i" => walk(el, bold, true, groups),
                _ => walk(el, bold, italic, groups),
            },
        }
    }
}

fn push_run(runs: &mut Vec<TextRun>, text: String, bold: bool, italic: bool) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = runs.last_mut() {
        if last.bold == bold && last.italic == italic {
            last.text.push_str(&text);
            return;
        }
    }
    runs.push(TextRun {
        text,
        bold,
        italic,
    });
}
