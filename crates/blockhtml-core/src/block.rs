//! Editor block model
//!
//! A document is a flat `Vec<Block>`. Every block carries a list of inline
//! entries, either styled text runs or links. The serde representation is
//! the JSON the editor front end exchanges with the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Inline style flags. Flags are independent and compose freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
    /// Fixed yellow background; no colour parameter.
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Styles {
    pub const NONE: Styles = Styles {
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
        code: false,
        highlight: false,
    };
    pub const BOLD: Styles = Styles { bold: true, ..Styles::NONE };
    pub const ITALIC: Styles = Styles { italic: true, ..Styles::NONE };
    pub const UNDERLINE: Styles = Styles { underline: true, ..Styles::NONE };
    pub const STRIKETHROUGH: Styles = Styles { strikethrough: true, ..Styles::NONE };
    pub const CODE: Styles = Styles { code: true, ..Styles::NONE };
    pub const HIGHLIGHT: Styles = Styles { highlight: true, ..Styles::NONE };

    /// True when no flag is set
    pub fn is_plain(&self) -> bool {
        *self == Styles::NONE
    }

    /// Union of both flag sets
    pub fn union(self, other: Styles) -> Styles {
        Styles {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            strikethrough: self.strikethrough || other.strikethrough,
            code: self.code || other.code,
            highlight: self.highlight || other.highlight,
        }
    }
}

/// One inline entry of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineContent {
    /// Raw, unescaped text with a style set. Never contains nested markup.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Styles::is_plain")]
        styles: Styles,
    },

    /// Hyperlink. Carries plain text only and does not compose with styles.
    Link {
        #[serde(default = "default_href", deserialize_with = "deserialize_href")]
        href: String,
        #[serde(default)]
        label: String,
    },
}

fn default_href() -> String {
    "#".to_string()
}

/// `null` and `""` read as `#`, same as a missing href
fn deserialize_href<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let href = Option::<String>::deserialize(deserializer)?;
    Ok(href.filter(|h| !h.is_empty()).unwrap_or_else(default_href))
}

impl InlineContent {
    /// Unstyled text run
    pub fn plain(text: impl Into<String>) -> Self {
        InlineContent::Text {
            text: text.into(),
            styles: Styles::NONE,
        }
    }

    /// Text run with the given styles
    pub fn styled(text: impl Into<String>, styles: Styles) -> Self {
        InlineContent::Text {
            text: text.into(),
            styles,
        }
    }

    /// Link run; an empty href falls back to `#`
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        let href = href.into();
        InlineContent::Link {
            href: if href.is_empty() { default_href() } else { href },
            label: label.into(),
        }
    }

    /// Visible text of this entry
    pub fn text(&self) -> &str {
        match self {
            InlineContent::Text { text, .. } => text,
            InlineContent::Link { label, .. } => label,
        }
    }
}

/// Block variants understood by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Paragraph,
    Heading,
    BulletListItem,
    NumberedListItem,
    CodeBlock,
    /// Any block type the editor knows but this crate does not (images,
    /// tables, ...). Serializes to nothing.
    #[serde(other)]
    Unknown,
}

/// Properties of a heading block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingProps {
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_level() -> u8 {
    Block::DEFAULT_HEADING_LEVEL
}

impl Default for HeadingProps {
    fn default() -> Self {
        Self {
            level: Block::DEFAULT_HEADING_LEVEL,
        }
    }
}

/// One structural unit of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,

    /// Present only for headings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<HeadingProps>,

    #[serde(default)]
    pub content: Vec<InlineContent>,
}

impl Block {
    pub const DEFAULT_HEADING_LEVEL: u8 = 2;

    /// Heading levels the editor supports
    pub const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 2..=4;

    fn new(kind: BlockKind, content: Vec<InlineContent>) -> Self {
        Self {
            kind,
            props: None,
            content,
        }
    }

    pub fn paragraph(content: Vec<InlineContent>) -> Self {
        Self::new(BlockKind::Paragraph, content)
    }

    /// A paragraph holding a single empty run, the editor's minimal block
    pub fn empty_paragraph() -> Self {
        Self::paragraph(vec![InlineContent::plain("")])
    }

    pub fn heading(level: u8, content: Vec<InlineContent>) -> Self {
        Self {
            kind: BlockKind::Heading,
            props: Some(HeadingProps { level }),
            content,
        }
    }

    pub fn bullet_list_item(content: Vec<InlineContent>) -> Self {
        Self::new(BlockKind::BulletListItem, content)
    }

    pub fn numbered_list_item(content: Vec<InlineContent>) -> Self {
        Self::new(BlockKind::NumberedListItem, content)
    }

    pub fn code_block(code: impl Into<String>) -> Self {
        Self::new(BlockKind::CodeBlock, vec![InlineContent::plain(code)])
    }

    /// Effective heading level. Missing or unsupported levels resolve to 2.
    pub fn heading_level(&self) -> u8 {
        self.props
            .map(|p| p.level)
            .filter(|level| Self::HEADING_LEVELS.contains(level))
            .unwrap_or(Self::DEFAULT_HEADING_LEVEL)
    }

    /// Concatenated visible text of all inline entries
    pub fn plain_text(&self) -> String {
        self.content.iter().map(InlineContent::text).collect()
    }

    /// A paragraph whose only content is one empty unstyled run
    pub fn is_empty_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph
            && matches!(
                self.content.as_slice(),
                [InlineContent::Text { text, styles }] if text.is_empty() && styles.is_plain()
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_union() {
        let styles = Styles::BOLD.union(Styles::ITALIC);
        assert!(styles.bold);
        assert!(styles.italic);
        assert!(!styles.code);
        assert!(!styles.is_plain());
        assert!(Styles::NONE.is_plain());
    }

    #[test]
    fn test_link_defaults_href() {
        assert_eq!(
            InlineContent::link("", "here"),
            InlineContent::Link {
                href: "#".to_string(),
                label: "here".to_string()
            }
        );
    }

    #[test]
    fn test_heading_level_fallback() {
        assert_eq!(Block::heading(3, vec![]).heading_level(), 3);
        assert_eq!(Block::heading(6, vec![]).heading_level(), 2);

        let mut block = Block::heading(4, vec![]);
        block.props = None;
        assert_eq!(block.heading_level(), 2);
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Block::empty_paragraph().is_empty_paragraph());
        assert!(!Block::paragraph(vec![InlineContent::plain("x")]).is_empty_paragraph());
        assert!(!Block::paragraph(vec![]).is_empty_paragraph());
    }

    #[test]
    fn test_json_shape() {
        let block = Block::heading(
            3,
            vec![
                InlineContent::styled("Bold", Styles::BOLD),
                InlineContent::link("/x", "here"),
            ],
        );
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r##"{"type":"heading","props":{"level":3},"content":[{"type":"text","text":"Bold","styles":{"bold":true}},{"type":"link","href":"/x","label":"here"}]}"##
        );
    }

    #[test]
    fn test_json_plain_text_omits_styles() {
        let block = Block::paragraph(vec![InlineContent::plain("hi")]);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"paragraph","content":[{"type":"text","text":"hi"}]}"#);
    }

    #[test]
    fn test_json_unknown_kind() {
        let block: Block =
            serde_json::from_str(r#"{"type":"image","props":{"level":2},"content":[]}"#).unwrap();
        assert_eq!(block.kind, BlockKind::Unknown);
    }

    #[test]
    fn test_json_link_without_href() {
        let inline: InlineContent = serde_json::from_str(r#"{"type":"link","label":"x"}"#).unwrap();
        assert_eq!(inline, InlineContent::link("#", "x"));
    }

    #[test]
    fn test_json_link_empty_href() {
        let inline: InlineContent =
            serde_json::from_str(r#"{"type":"link","href":"","label":"x"}"#).unwrap();
        assert_eq!(inline, InlineContent::link("#", "x"));

        let inline: InlineContent =
            serde_json::from_str(r#"{"type":"link","href":null,"label":"x"}"#).unwrap();
        assert_eq!(inline, InlineContent::link("#", "x"));
    }
}
