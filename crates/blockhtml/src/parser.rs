//! BlockParser - the entry point for HTML to block conversion.

use blockhtml_core::{Block, InlineContent};

use crate::node::{Node, NodeType};
use crate::rules::{Disposition, Filter, Rule, Rules};

/// Converts HTML (or a [`Node`] tree) into editor blocks.
///
/// Only the direct children of the root are inspected; each is mapped by the
/// first matching rule. Parsing never fails and always yields at least one
/// block.
pub struct BlockParser {
    rules: Rules,
}

impl BlockParser {
    /// Create a parser with the built-in tag mapping
    pub fn new() -> Self {
        Self {
            rules: Rules::new(),
        }
    }

    /// Convert an HTML fragment to blocks
    #[cfg(feature = "html")]
    pub fn parse(&self, html: &str) -> Vec<Block> {
        if html.trim().is_empty() {
            return vec![Block::empty_paragraph()];
        }
        self.parse_node(&crate::html::parse_html(html))
    }

    /// Convert the children of `root` to blocks
    pub fn parse_node(&self, root: &Node) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut removed = 0usize;
        let mut dropped = 0usize;

        for child in root.children() {
            match child.node_type {
                NodeType::Text => {
                    let text = child.value.as_deref().unwrap_or("").trim();
                    if !text.is_empty() {
                        blocks.push(Block::paragraph(vec![InlineContent::plain(text)]));
                    }
                }
                NodeType::Element => match self.rules.disposition(child) {
                    Disposition::Convert(rule) => blocks.extend(rule.apply(child)),
                    Disposition::Remove => removed += 1,
                    Disposition::Fallback => match flattened_paragraph(child) {
                        Some(block) => blocks.push(block),
                        None => dropped += 1,
                    },
                },
                _ => {}
            }
        }

        tracing::debug!(blocks = blocks.len(), removed, dropped, "parsed html into blocks");

        if blocks.is_empty() {
            blocks.push(Block::empty_paragraph());
        }
        blocks
    }

    /// Add a custom rule, checked before the built-in mapping
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Drop top-level elements matching the filter
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.rules.remove(filter);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current rules
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Unknown elements become a paragraph of their plain text, or nothing
fn flattened_paragraph(node: &Node) -> Option<Block> {
    let text = node.text_content();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(Block::paragraph(vec![InlineContent::plain(text)]))
    }
}
