//! # blockhtml
//!
//! Convert HTML to rich-text editor blocks and back.
//!
//! Stored content is HTML; the editor works on a flat list of blocks
//! (paragraphs, headings, list items, code blocks) whose inline content is a
//! list of styled text runs and links.
//!
//! ## Design
//!
//! Parsing goes through a small DOM-subset [`Node`] tree, so any HTML parser
//! can feed the converter. With the default `html` feature, strings are
//! parsed with scraper/html5ever.
//!
//! Both directions are total: malformed markup is repaired by the HTML
//! parser, unknown tags degrade to plain text, and unknown block kinds
//! serialize to nothing.
//!
//! ## Example
//!
//! ```rust
//! use blockhtml::{serialize, BlockParser, Options};
//!
//! let parser = BlockParser::new();
//! let blocks = parser.parse("<h3>Title</h3><ul><li>a</li><li>b</li></ul>");
//! assert_eq!(blocks.len(), 3);
//!
//! let html = serialize(&blocks, &Options::default());
//! assert_eq!(html, "<h3>Title</h3>\n<li>a</li>\n<li>b</li>");
//! ```

mod fix;
#[cfg(feature = "html")]
pub mod html;
mod inline;
mod json;
pub mod node;
mod parser;
mod rules;
#[cfg(feature = "html")]
mod session;

pub use blockhtml_core::{
    escape_html, escape_html_attr, serialize, serialize_block, serialize_inlines, Block,
    BlockKind, HeadingProps, HighlightOutput, InlineContent, Options, Styles, DEFAULT_LINK_CLASS,
};
pub use fix::{fix_all, fix_article_formatting, FixSummary, FormatFix};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use inline::parse_inlines;
pub use json::{blocks_from_json, blocks_to_json, blocks_to_json_pretty};
pub use node::{Node, NodeType};
pub use parser::BlockParser;
pub use rules::{Disposition, Filter, ReplacementFn, Rule, Rules};
#[cfg(feature = "html")]
pub use session::EditorSession;

/// Error type for blockhtml operations
#[derive(Debug, thiserror::Error)]
pub enum BlockHtmlError {
    #[error("Invalid block JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BlockHtmlError>;

/// Parse an HTML fragment with the built-in tag mapping
#[cfg(feature = "html")]
pub fn html_to_blocks(html: &str) -> Vec<Block> {
    BlockParser::new().parse(html)
}

/// Serialize blocks with default options
pub fn blocks_to_html(blocks: &[Block]) -> String {
    serialize(blocks, &Options::default())
}
