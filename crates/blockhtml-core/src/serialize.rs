//! Block serialization
//!
//! Converts editor blocks into an HTML fragment. List items are emitted as
//! bare `<li>` elements without a `<ul>`/`<ol>` wrapper; the parser side
//! flattens list wrappers away, so neither direction keeps list containers.

use crate::block::{Block, BlockKind, InlineContent, Styles};
use crate::options::{HighlightOutput, Options};

/// Serialize a document to an HTML fragment
pub fn serialize(blocks: &[Block], options: &Options) -> String {
    let mut output = String::with_capacity(blocks.len() * 64);
    let mut dropped = 0usize;

    for block in blocks {
        let start_len = output.len();
        if start_len > 0 {
            output.push_str(&options.separator);
        }
        let content_start = output.len();
        serialize_block_into(block, options, &mut output);

        if output.len() == content_start {
            // Nothing written for this block, take back the separator too
            output.truncate(start_len);
            dropped += 1;
        }
    }

    tracing::trace!(
        blocks = blocks.len(),
        dropped,
        bytes = output.len(),
        "serialized blocks"
    );
    output
}

/// Serialize a single block. Unknown kinds produce an empty string.
pub fn serialize_block(block: &Block, options: &Options) -> String {
    let mut out = String::new();
    serialize_block_into(block, options, &mut out);
    out
}

fn serialize_block_into(block: &Block, options: &Options, out: &mut String) {
    match block.kind {
        BlockKind::Paragraph => wrap_inlines("p", &block.content, options, out),

        BlockKind::Heading => {
            let tag = match block.heading_level() {
                3 => "h3",
                4 => "h4",
                _ => "h2",
            };
            wrap_inlines(tag, &block.content, options, out);
        }

        BlockKind::BulletListItem | BlockKind::NumberedListItem => {
            wrap_inlines("li", &block.content, options, out)
        }

        BlockKind::CodeBlock => {
            out.push_str("<pre><code>");
            for inline in &block.content {
                out.push_str(&escape_html(inline.text()));
            }
            out.push_str("</code></pre>");
        }

        BlockKind::Unknown => {}
    }
}

fn wrap_inlines(tag: &str, inlines: &[InlineContent], options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&serialize_inlines(inlines, options));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Serialize inline entries to HTML
pub fn serialize_inlines(inlines: &[InlineContent], options: &Options) -> String {
    let mut out = String::new();
    for inline in inlines {
        serialize_inline(inline, options, &mut out);
    }
    out
}

fn serialize_inline(inline: &InlineContent, options: &Options, out: &mut String) {
    match inline {
        InlineContent::Text { text, styles } => {
            let tags = style_tags(styles, options);
            for tag in &tags {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            out.push_str(&escape_html(text));
            for tag in tags.iter().rev() {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }

        InlineContent::Link { href, label } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html_attr(href));
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"");
            out.push_str(&escape_html_attr(&options.link_class));
            out.push_str("\">");
            out.push_str(&escape_html(label));
            out.push_str("</a>");
        }
    }
}

/// Tags for the active flags, outermost first: strong, em, u, s, code, then
/// mark when highlight output is enabled.
fn style_tags(styles: &Styles, options: &Options) -> Vec<&'static str> {
    let mut tags = Vec::with_capacity(6);
    if styles.bold {
        tags.push("strong");
    }
    if styles.italic {
        tags.push("em");
    }
    if styles.underline {
        tags.push("u");
    }
    if styles.strikethrough {
        tags.push("s");
    }
    if styles.code {
        tags.push("code");
    }
    if styles.highlight && options.highlight == HighlightOutput::Mark {
        tags.push("mark");
    }
    tags
}

/// Escape text content
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an attribute value (double-quoted)
pub fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_LINK_CLASS;

    fn default_options() -> Options {
        Options::default()
    }

    #[test]
    fn test_paragraph() {
        let blocks = vec![Block::paragraph(vec![InlineContent::plain("Hello World")])];
        assert_eq!(serialize(&blocks, &default_options()), "<p>Hello World</p>");
    }

    #[test]
    fn test_heading_levels() {
        let blocks = vec![
            Block::heading(2, vec![InlineContent::plain("Two")]),
            Block::heading(3, vec![InlineContent::plain("Three")]),
            Block::heading(4, vec![InlineContent::plain("Four")]),
        ];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "<h2>Two</h2>\n<h3>Three</h3>\n<h4>Four</h4>"
        );
    }

    #[test]
    fn test_heading_unsupported_level_uses_h2() {
        let blocks = vec![Block::heading(1, vec![InlineContent::plain("Top")])];
        assert_eq!(serialize(&blocks, &default_options()), "<h2>Top</h2>");
    }

    #[test]
    fn test_style_precedence() {
        let all = Styles {
            bold: true,
            italic: true,
            underline: true,
            strikethrough: true,
            code: true,
            highlight: false,
        };
        let blocks = vec![Block::paragraph(vec![InlineContent::styled("x", all)])];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "<p><strong><em><u><s><code>x</code></s></u></em></strong></p>"
        );
    }

    #[test]
    fn test_bold_italic_nesting() {
        let blocks = vec![Block::paragraph(vec![InlineContent::styled(
            "x",
            Styles::BOLD.union(Styles::ITALIC),
        )])];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "<p><strong><em>x</em></strong></p>"
        );
    }

    #[test]
    fn test_highlight_dropped_by_default() {
        let blocks = vec![Block::paragraph(vec![InlineContent::styled(
            "hot",
            Styles::HIGHLIGHT,
        )])];
        assert_eq!(serialize(&blocks, &default_options()), "<p>hot</p>");
    }

    #[test]
    fn test_highlight_mark() {
        let options = Options {
            highlight: HighlightOutput::Mark,
            ..Default::default()
        };
        let blocks = vec![Block::paragraph(vec![InlineContent::styled(
            "hot",
            Styles::HIGHLIGHT.union(Styles::BOLD),
        )])];
        assert_eq!(
            serialize(&blocks, &options),
            "<p><strong><mark>hot</mark></strong></p>"
        );
    }

    #[test]
    fn test_link() {
        let blocks = vec![Block::paragraph(vec![
            InlineContent::plain("See "),
            InlineContent::link("/x", "here"),
            InlineContent::plain(" now"),
        ])];
        assert_eq!(
            serialize(&blocks, &default_options()),
            format!(
                "<p>See <a href=\"/x\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"{}\">here</a> now</p>",
                DEFAULT_LINK_CLASS
            )
        );
    }

    #[test]
    fn test_link_class_option() {
        let options = Options {
            link_class: "link".to_string(),
            ..Default::default()
        };
        let html = serialize_inlines(&[InlineContent::link("a\"b", "x")], &options);
        assert_eq!(
            html,
            "<a href=\"a&quot;b\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"link\">x</a>"
        );
    }

    #[test]
    fn test_list_items_have_no_wrapper() {
        let blocks = vec![
            Block::bullet_list_item(vec![InlineContent::plain("a")]),
            Block::numbered_list_item(vec![InlineContent::plain("b")]),
        ];
        assert_eq!(serialize(&blocks, &default_options()), "<li>a</li>\n<li>b</li>");
    }

    #[test]
    fn test_code_block() {
        let blocks = vec![Block::code_block("if a < b && c {\n}")];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "<pre><code>if a &lt; b &amp;&amp; c {\n}</code></pre>"
        );
    }

    #[test]
    fn test_code_block_ignores_styles() {
        let block = Block {
            kind: BlockKind::CodeBlock,
            props: None,
            content: vec![InlineContent::styled("x", Styles::BOLD)],
        };
        assert_eq!(serialize_block(&block, &default_options()), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_unknown_block_dropped() {
        let unknown = Block {
            kind: BlockKind::Unknown,
            props: None,
            content: vec![InlineContent::plain("ignored")],
        };
        let blocks = vec![
            Block::paragraph(vec![InlineContent::plain("a")]),
            unknown.clone(),
            Block::paragraph(vec![InlineContent::plain("b")]),
        ];
        assert_eq!(serialize(&blocks, &default_options()), "<p>a</p>\n<p>b</p>");
        assert_eq!(serialize(&[unknown], &default_options()), "");
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(
            serialize(&[Block::empty_paragraph()], &default_options()),
            "<p></p>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let blocks = vec![Block::paragraph(vec![InlineContent::plain("1 < 2 & 3 > 2")])];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "<p>1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn test_custom_separator() {
        let options = Options {
            separator: String::new(),
            ..Default::default()
        };
        let blocks = vec![
            Block::paragraph(vec![InlineContent::plain("a")]),
            Block::paragraph(vec![InlineContent::plain("b")]),
        ];
        assert_eq!(serialize(&blocks, &options), "<p>a</p><p>b</p>");
    }
}
