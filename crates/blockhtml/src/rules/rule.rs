//! Tag rules: which top-level elements a parser extension claims, and the
//! blocks it builds for them.

use blockhtml_core::Block;

use crate::node::Node;

/// Builds the blocks for one matched top-level element. An empty vector
/// drops the element from the document.
pub type ReplacementFn = Box<dyn Fn(&Node) -> Vec<Block> + Send + Sync>;

/// Element matcher. Text and comment nodes never match.
pub enum Filter {
    TagName(String),
    /// Any tag in the set
    TagNames(Vec<String>),
    /// Arbitrary test, e.g. on a `data-*` attribute
    Predicate(Box<dyn Fn(&Node) -> bool + Send + Sync>),
}

impl Filter {
    /// Names are compared lowercase, like `Node::tag_name`
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    pub fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            Filter::TagName(t) => node.tag_name() == t,
            Filter::TagNames(tags) => tags.iter().any(|t| t == node.tag_name()),
            Filter::Predicate(f) => f(node),
        }
    }
}

/// Maps a matched top-level element to zero or more editor blocks
pub struct Rule {
    pub filter: Filter,
    pub replacement: ReplacementFn,
}

impl Rule {
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node) -> Vec<Block> + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    /// Rule for one tag, e.g. `Rule::for_tag("aside", ...)`
    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&Node) -> Vec<Block> + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Rule shared by several tags, such as the heading levels
    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node) -> Vec<Block> + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    /// Blocks for `node`; callers check `filter` first
    pub fn apply(&self, node: &Node) -> Vec<Block> {
        (self.replacement)(node)
    }
}
