//! blockhtml-core - editor block model and HTML serialization
//!
//! This crate provides the data structures a rich-text editor works on and
//! the serializer that turns them back into HTML. It is used by `blockhtml`
//! (which parses HTML into blocks) and `blockhtml-napi` (the JS host binding).
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse──▶ ┌──────────────┐
//!                        │              │
//!                        │ Vec<Block>   │ ──serialize──▶ HTML String
//! Editor JSON ──serde──▶ │              │
//!                        └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockhtml_core::{serialize, Block, InlineContent, Options, Styles};
//!
//! let blocks = vec![
//!     Block::heading(3, vec![InlineContent::plain("Dosage")]),
//!     Block::paragraph(vec![
//!         InlineContent::plain("Take "),
//!         InlineContent::styled("one", Styles::BOLD),
//!         InlineContent::plain(" daily."),
//!     ]),
//! ];
//!
//! let html = serialize(&blocks, &Options::default());
//! assert_eq!(html, "<h3>Dosage</h3>\n<p>Take <strong>one</strong> daily.</p>");
//! ```

mod block;
mod options;
mod serialize;

pub use block::{Block, BlockKind, HeadingProps, InlineContent, Styles};
pub use options::{HighlightOutput, Options, DEFAULT_LINK_CLASS};
pub use serialize::{escape_html, escape_html_attr, serialize, serialize_block, serialize_inlines};
