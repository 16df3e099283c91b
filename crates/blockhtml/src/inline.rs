//! Inline markup to styled runs.
//!
//! Walks an element's children carrying the style set accumulated along the
//! ancestor chain, flattening nested formatting into one run per text node.

use blockhtml_core::{InlineContent, Styles};

use crate::node::{Node, NodeType};

/// Parse the inline content of a block-level element.
///
/// Always returns at least one entry: when the element holds no text, a
/// single empty unstyled run stands in.
pub fn parse_inlines(node: &Node) -> Vec<InlineContent> {
    let mut inlines = Vec::new();
    collect_inlines(node, Styles::NONE, &mut inlines);

    if inlines.is_empty() {
        inlines.push(InlineContent::plain(""));
    }
    inlines
}

fn collect_inlines(node: &Node, styles: Styles, out: &mut Vec<InlineContent>) {
    for child in node.children() {
        match child.node_type {
            NodeType::Text => {
                if let Some(text) = child.value.as_deref().filter(|t| !t.is_empty()) {
                    out.push(InlineContent::styled(text, styles));
                }
            }
            NodeType::Element if child.tag_name() == "a" => {
                // Links keep only their first piece of text
                let href = child.attr("href").unwrap_or("#");
                let label = child.first_text().unwrap_or("");
                out.push(InlineContent::link(href, label));
            }
            NodeType::Element => {
                collect_inlines(child, styles.union(tag_styles(child.tag_name())), out);
            }
            _ => {}
        }
    }
}

/// Style flags contributed by an inline tag
fn tag_styles(tag: &str) -> Styles {
    match tag {
        "strong" | "b" => Styles::BOLD,
        "em" | "i" => Styles::ITALIC,
        "u" => Styles::UNDERLINE,
        "s" | "strike" => Styles::STRIKETHROUGH,
        "code" => Styles::CODE,
        "mark" => Styles::HIGHLIGHT,
        _ => Styles::NONE,
    }
}
