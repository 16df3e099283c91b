use blockhtml::{
    blocks_from_json, blocks_to_json, serialize, Block, BlockKind, BlockParser, HighlightOutput,
    InlineContent, Options, Styles, DEFAULT_LINK_CLASS,
};

fn parse(html: &str) -> Vec<Block> {
    BlockParser::new().parse(html)
}

fn to_html(blocks: &[Block]) -> String {
    serialize(blocks, &Options::default())
}

fn assert_stable(html: &str) {
    let once = to_html(&parse(html));
    let twice = to_html(&parse(&once));
    assert_eq!(once, twice, "conversion of {html:?} is not stable");
}

#[test]
fn round_trip_is_stable() {
    let inputs = [
        "<p>Hello <strong>bold <em>both</em></strong> and <u>u</u> <s>s</s> <code>c</code></p>",
        "<h2>Two</h2><h3>Three</h3><h4>Four</h4>",
        "<ul><li>a</li><li><b>b</b></li></ul><ol><li>c</li></ol>",
        "<ul><li>a<ul><li>nested</li></ul></li></ul>",
        "<pre><code>x &lt; y\n  indented</code></pre>",
        r#"<p>See <a href="/x" class="old">here</a> now</p>"#,
        "<blockquote><p>quoted</p></blockquote>",
        "<div>loose</div><p></p><p> </p>",
        "<p><mark>highlighted</mark> &amp; escaped</p>",
        "plain text only",
        "",
    ];

    for html in inputs {
        assert_stable(html);
    }
}

#[test]
fn empty_input_yields_one_empty_paragraph() {
    for html in ["", "   "] {
        let blocks = parse(html);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].content, vec![InlineContent::plain("")]);
    }
}

#[test]
fn style_composition_round_trips() {
    let blocks = parse("<p><strong><em>x</em></strong></p>");
    assert_eq!(
        blocks[0].content,
        vec![InlineContent::styled("x", Styles::BOLD.union(Styles::ITALIC))]
    );
    assert_eq!(to_html(&blocks), "<p><strong><em>x</em></strong></p>");

    // Nesting order in the source does not matter
    let blocks = parse("<p><em><strong>x</strong></em></p>");
    assert_eq!(to_html(&blocks), "<p><strong><em>x</em></strong></p>");
}

#[test]
fn link_attributes_are_normalized() {
    let blocks = parse(r#"<p>See <a href="/x" target="_self" rel="nofollow">here</a> now</p>"#);
    assert_eq!(
        blocks[0].content,
        vec![
            InlineContent::plain("See "),
            InlineContent::link("/x", "here"),
            InlineContent::plain(" now"),
        ]
    );
    assert_eq!(
        to_html(&blocks),
        format!(
            r#"<p>See <a href="/x" target="_blank" rel="noopener noreferrer" class="{DEFAULT_LINK_CLASS}">here</a> now</p>"#
        )
    );
}

#[test]
fn lists_flatten_and_serialize_without_wrapper() {
    let blocks = parse("<ul><li>a</li><li>b</li></ul>");
    assert_eq!(
        blocks,
        vec![
            Block::bullet_list_item(vec![InlineContent::plain("a")]),
            Block::bullet_list_item(vec![InlineContent::plain("b")]),
        ]
    );
    assert_eq!(to_html(&blocks), "<li>a</li>\n<li>b</li>");
}

#[test]
fn heading_level_round_trips() {
    let blocks = parse("<h3>Title</h3>");
    assert_eq!(blocks[0].kind, BlockKind::Heading);
    assert_eq!(blocks[0].heading_level(), 3);
    assert_eq!(to_html(&blocks), "<h3>Title</h3>");
}

#[test]
fn unknown_tags() {
    assert_eq!(
        parse("<div>hello</div>"),
        vec![Block::paragraph(vec![InlineContent::plain("hello")])]
    );
    assert_eq!(parse("<p>a</p><div></div>").len(), 1);
}

#[test]
fn highlight_survives_with_mark_output() {
    let options = Options {
        highlight: HighlightOutput::Mark,
        ..Default::default()
    };
    let html = serialize(&parse("<p><mark>x</mark></p>"), &options);
    assert_eq!(html, "<p><mark>x</mark></p>");
    assert_eq!(
        parse(&html)[0].content,
        vec![InlineContent::styled("x", Styles::HIGHLIGHT)]
    );
}

#[test]
fn editor_json_to_html() {
    let json = r#"[
        {"type": "heading", "props": {"level": 2}, "content": [{"type": "text", "text": "Stack"}]},
        {"type": "numberedListItem", "content": [{"type": "text", "text": "Morning", "styles": {"italic": true}}]},
        {"type": "table", "content": []},
        {"type": "codeBlock", "content": [{"type": "text", "text": "a < b"}]}
    ]"#;

    let blocks = blocks_from_json(json).unwrap();
    assert_eq!(
        to_html(&blocks),
        "<h2>Stack</h2>\n<li><em>Morning</em></li>\n<pre><code>a &lt; b</code></pre>"
    );
}

#[test]
fn html_to_json_and_back() {
    let blocks = parse("<h4>Notes</h4><p>Take <b>2</b> capsules</p>");
    let json = blocks_to_json(&blocks).unwrap();
    assert_eq!(blocks_from_json(&json).unwrap(), blocks);
}
