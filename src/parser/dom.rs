//! Minimal markup tree built leniently from editor HTML.
//!
//! The block parser and run extractor walk a tiny internal tree type,
//! tag name plus children, so the rest of the crate is decoupled from
//! the tokenizer. Attributes are dropped; only tag identity matters.
//!
//! Editor output is not guaranteed to be well formed. The builder
//! recovers instead of failing: void tags close themselves, a mismatched
//! end tag pops the open-element stack until it finds its partner (or is
//! ignored), and a tokenizer error simply ends the walk with whatever
//! was parsed so far.

use quick_xml::events::Event;
use quick_xml::Reader;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a lowercase tag name and its children.
    Element(Element),
    /// A text node.
    Text(String),
}

/// An element: tag identity and children, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercase tag name (empty for the synthetic root)
    pub tag: String,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn all_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

/// Tags that never have content and close themselves.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Resolver for the handful of named entities editors emit beyond the
/// XML predefined set.
fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "nbsp" => Some("\u{00A0}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201C}"),
        "rdquo" => Some("\u{201D}"),
        "hellip" => Some("\u{2026}"),
        "bull" => Some("\u{2022}"),
        _ => None,
    }
}

/// Parse a markup fragment into a tree rooted at a synthetic element.
///
/// Never fails; the worst malformed input yields a root with fewer
/// children than the author intended.
pub fn parse_markup(input: &str) -> Element {
    let mut reader = Reader::from_str(input);
    reader.check_end_names(false);

    // Stack of open elements; index 0 is the synthetic root.
    let mut stack: Vec<Element> = vec![Element::new("")];

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let tag = String::from_utf8_lossy(start.local_name().as_ref()).to_lowercase();
                if is_void(&tag) {
                    push_child(&mut stack, Node::Element(Element::new(tag)));
                } else {
                    stack.push(Element::new(tag));
                }
            }
            Ok(Event::Empty(start)) => {
                let tag = String::from_utf8_lossy(start.local_name().as_ref()).to_lowercase();
                push_child(&mut stack, Node::Element(Element::new(tag)));
            }
            Ok(Event::End(end)) => {
                let tag = String::from_utf8_lossy(end.local_name().as_ref()).to_lowercase();
                close_element(&mut stack, &tag);
            }
            Ok(Event::Text(text)) => {
                let resolved = text
                    .unescape_with(|name| resolve_entity(name))
                    .map(|t| t.into_owned())
                    .unwrap_or_else(|_| {
                        String::from_utf8_lossy(text.as_ref()).into_owned()
                    });
                if !resolved.is_empty() {
                    push_child(&mut stack, Node::Text(resolved));
                }
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if !text.is_empty() {
                    push_child(&mut stack, Node::Text(text));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // comments, processing instructions, doctype
            Err(err) => {
                log::warn!("markup tokenizer stopped early: {err}");
                break;
            }
        }
    }

    // Fold elements left open at EOF back into their parents.
    while stack.len() > 1 {
        let el = stack.pop().unwrap();
        push_child(&mut stack, Node::Element(el));
    }
    stack.pop().unwrap()
}

fn push_child(stack: &mut [Element], node: Node) {
    stack
        .last_mut()
        .expect("root element always on the stack")
        .children
        .push(node);
}

/// Close the innermost open element with the given tag, folding anything
/// opened after it back into place. An end tag with no open partner is
/// ignored.
fn close_element(stack: &mut Vec<Element>, tag: &str) {
    let Some(pos) = stack.iter().rposition(|el| el.tag == tag) else {
        return;
    };
    if pos == 0 {
        return; // never close the synthetic root
    }
    while stack.len() > pos {
        let el = stack.pop().unwrap();
        push_child(stack, Node::Element(el));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_tags(el: &Element) -> Vec<&str> {
        el.children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e.tag.as_str()),
                Node::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_simple_fragment() {
        let root = parse_markup("<h1>Title</h1><p>Body</p>");
        assert_eq!(child_tags(&root), vec!["h1", "p"]);
        assert_eq!(root.all_text(), "TitleBody");
    }

    #[test]
    fn test_nested_inline() {
        let root = parse_markup("<p>a <strong>b <em>c</em></strong> d</p>");
        assert_eq!(root.all_text(), "a b c d");
    }

    #[test]
    fn test_unclosed_void_br() {
        let root = parse_markup("<p>Line1<br>Line2</p>");
        let Node::Element(p) = &root.children[0] else {
            panic!("expected element");
        };
        assert_eq!(p.tag, "p");
        assert_eq!(
            p.children,
            vec![
                Node::Text("Line1".into()),
                Node::Element(Element::new("br")),
                Node::Text("Line2".into()),
            ]
        );
    }

    #[test]
    fn test_self_closed_void() {
        let root = parse_markup("<p>a<br/>b</p><hr/>");
        assert_eq!(root.all_text(), "ab");
        assert_eq!(child_tags(&root), vec!["p", "hr"]);
    }

    #[test]
    fn test_unclosed_tag_at_eof() {
        let root = parse_markup("<p>open<strong>bold");
        assert_eq!(root.all_text(), "openbold");
        assert_eq!(child_tags(&root), vec!["p"]);
    }

    #[test]
    fn test_stray_end_tag_ignored() {
        let root = parse_markup("</em><p>text</p>");
        assert_eq!(root.all_text(), "text");
        assert_eq!(child_tags(&root), vec!["p"]);
    }

    #[test]
    fn test_mismatched_nesting_recovers() {
        // </p> closes p, folding the still-open strong into it
        let root = parse_markup("<p><strong>bold</p><p>next</p>");
        assert_eq!(child_tags(&root), vec!["p", "p"]);
        assert_eq!(root.all_text(), "boldnext");
    }

    #[test]
    fn test_entities() {
        let root = parse_markup("<p>a&nbsp;b &amp; c&hellip;</p>");
        assert_eq!(root.all_text(), "a\u{00A0}b & c\u{2026}");
    }

    #[test]
    fn test_uppercase_tags_lowered() {
        let root = parse_markup("<P>x</P>");
        assert_eq!(child_tags(&root), vec!["p"]);
    }

    #[test]
    fn test_attributes_ignored() {
        let root = parse_markup(r#"<p class="lead" data-id="3">x</p>"#);
        assert_eq!(child_tags(&root), vec!["p"]);
        assert_eq!(root.all_text(), "x");
    }

    #[test]
    fn test_empty_input() {
        let root = parse_markup("");
        assert!(root.children.is_empty());
    }
}
