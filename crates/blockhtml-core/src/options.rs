//! Configuration options for HTML serialization

/// Design-system class applied to every serialized link
pub const DEFAULT_LINK_CLASS: &str = "text-primary underline hover:text-primary/80";

/// What to do with highlighted runs when serializing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightOutput {
    /// Emit highlighted text without a wrapper; keeps the output inside the
    /// editor's stored tag vocabulary
    #[default]
    Drop,
    /// Wrap highlighted text in `<mark>`
    Mark,
}

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// `class` attribute put on every `<a>`
    pub link_class: String,

    /// Highlight handling
    pub highlight: HighlightOutput,

    /// String placed between serialized blocks
    pub separator: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            link_class: DEFAULT_LINK_CLASS.to_string(),
            highlight: HighlightOutput::Drop,
            separator: "\n".to_string(),
        }
    }
}
