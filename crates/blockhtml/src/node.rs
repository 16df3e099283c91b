//! DOM-subset node structure consumed by the block parser.
//!
//! The parser only needs node-type discrimination, tag names, attributes and
//! child iteration. Any HTML parser can build this tree; with the `html`
//! feature [`crate::parse_html`] builds it from a string via scraper.

/// Node kinds the parser distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
    Comment,
    /// Container for top-level nodes; has no tag of its own
    Fragment,
}

/// A DOM node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: NodeType,

    /// Lowercase tag name for elements, empty otherwise
    pub name: String,

    /// Text for text and comment nodes
    pub value: Option<String>,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_lowercase(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            name: String::new(),
            value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            value: Some(content.to_string()),
            ..Self::fragment()
        }
    }

    /// Create an empty fragment (document root)
    pub fn fragment() -> Self {
        Self {
            node_type: NodeType::Fragment,
            name: String::new(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Lowercase tag name; empty for non-elements
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Direct element children with the given tag
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children
            .iter()
            .filter(move |c| c.is_element() && c.name == tag)
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All text of this node and its descendants, comments excluded
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self.node_type {
            NodeType::Text => out.push_str(self.value.as_deref().unwrap_or("")),
            NodeType::Comment => {}
            NodeType::Element | NodeType::Fragment => {
                for child in &self.children {
                    child.push_text(out);
                }
            }
        }
    }

    /// Text of the first descendant text node holding non-whitespace content
    pub fn first_text(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match child.node_type {
            NodeType::Text => child.value.as_deref().filter(|t| !t.trim().is_empty()),
            NodeType::Element => child.first_text(),
            _ => None,
        })
    }

    /// First descendant element with the given tag, depth first
    pub fn find_element(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find_map(|child| {
            if !child.is_element() {
                None
            } else if child.name == tag {
                Some(child)
            } else {
                child.find_element(tag)
            }
        })
    }
}
