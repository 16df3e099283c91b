//! Rule system for top-level element conversion.

mod builtin;
mod rule;

pub use builtin::builtin_rules;
pub use rule::{Filter, ReplacementFn, Rule};

use indexmap::IndexMap;

use crate::node::Node;

/// What the parser should do with a top-level element
pub enum Disposition<'a> {
    /// Convert with this rule
    Convert(&'a Rule),
    /// Drop the element entirely
    Remove,
    /// No rule matched; use the flattened-text fallback
    Fallback,
}

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Remove rules (drop the element)
    remove_rules: Vec<Filter>,
    /// Built-in tag mapping
    builtin_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in mapping
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            remove_rules: Vec::new(),
            builtin_rules: builtin_rules(),
        }
    }

    /// Add a custom rule. Re-using a key replaces the earlier rule in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a remove filter
    pub fn remove(&mut self, filter: Filter) {
        self.remove_rules.push(filter);
    }

    /// Names of the custom rules in the order they are checked
    pub fn custom_keys(&self) -> impl Iterator<Item = &str> {
        self.custom_rules.keys().map(String::as_str)
    }

    /// Decide how a top-level element is converted.
    ///
    /// Custom rules win over remove filters, which win over the built-in
    /// mapping.
    pub fn disposition(&self, node: &Node) -> Disposition<'_> {
        if let Some(rule) = self
            .custom_rules
            .values()
            .find(|rule| rule.filter.matches(node))
        {
            return Disposition::Convert(rule);
        }

        if self.remove_rules.iter().any(|filter| filter.matches(node)) {
            return Disposition::Remove;
        }

        match self
            .builtin_rules
            .iter()
            .find(|rule| rule.filter.matches(node))
        {
            Some(rule) => Disposition::Convert(rule),
            None => Disposition::Fallback,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
