//! Editor session glue.
//!
//! Binds the parser and serializer to a live editing surface: the tree is
//! seeded once from stored HTML, and every change re-derives the HTML and
//! hands it to the caller's callback.

use blockhtml_core::{serialize, Block, Options};

use crate::parser::BlockParser;

/// A single editing session over one document.
///
/// The session is the only writer of its block tree. Retry, debounce and
/// validation are left to the callback.
pub struct EditorSession<F>
where
    F: FnMut(&str),
{
    document: Vec<Block>,
    options: Options,
    on_change: F,
}

impl<F> EditorSession<F>
where
    F: FnMut(&str),
{
    /// Start a session with the default parser and serializer options.
    ///
    /// `initial_content` is parsed once; without it the document starts as a
    /// single empty paragraph. Seeding does not invoke `on_change`.
    pub fn new(initial_content: Option<&str>, on_change: F) -> Self {
        Self::with_parser(&BlockParser::new(), Options::default(), initial_content, on_change)
    }

    /// Start a session with a configured parser and serializer options
    pub fn with_parser(
        parser: &BlockParser,
        options: Options,
        initial_content: Option<&str>,
        on_change: F,
    ) -> Self {
        let document = match initial_content {
            Some(html) => parser.parse(html),
            None => vec![Block::empty_paragraph()],
        };
        tracing::debug!(blocks = document.len(), "editor session started");

        Self {
            document,
            options,
            on_change,
        }
    }

    /// The current block tree
    pub fn document(&self) -> &[Block] {
        &self.document
    }

    /// Serialize the current tree without notifying
    pub fn html(&self) -> String {
        serialize(&self.document, &self.options)
    }

    /// Content-change notification carrying a whole new tree
    pub fn replace_document(&mut self, document: Vec<Block>) {
        self.document = document;
        self.notify();
    }

    /// Mutate the tree in place, then notify
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Vec<Block>) -> R) -> R {
        let result = f(&mut self.document);
        self.notify();
        result
    }

    /// End the session, returning the final tree
    pub fn into_document(self) -> Vec<Block> {
        self.document
    }

    fn notify(&mut self) {
        let html = serialize(&self.document, &self.options);
        tracing::trace!(blocks = self.document.len(), bytes = html.len(), "document changed");
        (self.on_change)(&html);
    }
}
