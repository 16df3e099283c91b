//! Built-in tag mapping for the editor's block vocabulary.

use blockhtml_core::Block;

use super::Rule;
use crate::inline::parse_inlines;

/// Create all built-in rules
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        paragraph_rule(),
        heading_rule(),
        bullet_list_rule(),
        numbered_list_rule(),
        stray_list_item_rule(),
        code_block_rule(),
        blockquote_rule(),
    ]
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |node| vec![Block::paragraph(parse_inlines(node))])
}

fn heading_rule() -> Rule {
    Rule::for_tags(&["h2", "h3", "h4"], |node| {
        let level = node.tag_name()[1..]
            .parse()
            .unwrap_or(Block::DEFAULT_HEADING_LEVEL);
        vec![Block::heading(level, parse_inlines(node))]
    })
}

fn bullet_list_rule() -> Rule {
    Rule::for_tag("ul", |node| {
        node.children_named("li")
            .map(|li| Block::bullet_list_item(parse_inlines(li)))
            .collect()
    })
}

fn numbered_list_rule() -> Rule {
    Rule::for_tag("ol", |node| {
        node.children_named("li")
            .map(|li| Block::numbered_list_item(parse_inlines(li)))
            .collect()
    })
}

// The serializer writes list items without a wrapper, so a bare <li> at the
// top level is read back as a bullet item.
fn stray_list_item_rule() -> Rule {
    Rule::for_tag("li", |node| vec![Block::bullet_list_item(parse_inlines(node))])
}

fn code_block_rule() -> Rule {
    Rule::for_tag("pre", |node| {
        let code = node
            .find_element("code")
            .map(|code| code.text_content())
            .unwrap_or_else(|| node.text_content());
        vec![Block::code_block(code)]
    })
}

// Quote semantics are not kept; the content becomes a paragraph.
fn blockquote_rule() -> Rule {
    Rule::for_tag("blockquote", |node| {
        vec![Block::paragraph(parse_inlines(node))]
    })
}
