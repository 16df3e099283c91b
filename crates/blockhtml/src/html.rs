//! HTML parsing support.
//!
//! Parses HTML strings with scraper (html5ever) and converts the result to
//! the [`Node`] tree the block parser walks. Malformed markup is repaired by
//! html5ever's own recovery rules.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a [`NodeType::Fragment`](crate::NodeType::Fragment)
/// node whose children are the fragment's top-level nodes.
///
/// # Example
///
/// ```rust
/// use blockhtml::parse_html;
///
/// let root = parse_html("<h3>Dosage</h3>Some text");
/// assert_eq!(root.children().count(), 2);
/// assert_eq!(root.children[0].tag_name(), "h3");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);

    // parse_fragment wraps the content in a synthetic <html> element
    let mut root = Node::fragment();
    append_children(document.root_element(), &mut root);
    root
}

fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };
    append_children(element, &mut node);
    node
}

fn append_children(element: ElementRef, node: &mut Node) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}
