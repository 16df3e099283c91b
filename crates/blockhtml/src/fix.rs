//! Article formatting fixer.
//!
//! Stored articles (generated or pasted) often carry markdown that was never
//! rendered: literal `**bold**`, paragraphs starting with `## `, and runs of
//! `- item` paragraphs. This pass rewrites those paragraphs into real HTML
//! and removes empty paragraphs. Everything outside `<p>` elements is copied
//! unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<p(?:\s[^>]*)?>)(.*?)</p\s*>").unwrap());
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<(/)?([A-Za-z][A-Za-z0-9]*)[^>]*>").unwrap());
static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BOLD_STARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").unwrap());
static BOLD_UNDERSCORES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_\n]+?)__").unwrap());
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,4})\s+(.+)$").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+(.+)$").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s+(.+)$").unwrap());
static BLANK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\s|&nbsp;|&#160;|<br\s*/?>)*$").unwrap());

/// Result of fixing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFix {
    pub html: String,
    /// Number of rewrites applied; zero means `html` equals the input
    pub changes: usize,
}

impl FormatFix {
    pub fn changed(&self) -> bool {
        self.changes > 0
    }
}

/// Summary of a batch run over many documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSummary<K> {
    pub scanned: usize,
    /// Documents that needed changes, with their fixed HTML
    pub fixed: Vec<(K, FormatFix)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

/// Classified line of a paragraph body
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Heading(u8, &'a str),
    Item(ListKind, &'a str),
    /// Untrimmed, so rewritten paragraphs keep their spacing
    Text(&'a str),
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if let Some(caps) = HEADING_RE.captures(line) {
        let level = caps[1].len().clamp(2, 4) as u8;
        return Line::Heading(level, caps.get(2).map_or("", |m| m.as_str().trim()));
    }
    if let Some(caps) = BULLET_RE.captures(line) {
        return Line::Item(ListKind::Bullet, caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = NUMBERED_RE.captures(line) {
        return Line::Item(ListKind::Numbered, caps.get(1).map_or("", |m| m.as_str()));
    }
    Line::Text(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    OutsideList,
    InsideList(ListKind),
}

/// Output writer tracking whether a list element is open
struct ListWriter {
    out: String,
    state: ListState,
    /// Whitespace seen while a list is open, written only if the list closes
    pending_gap: String,
}

impl ListWriter {
    fn new(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            state: ListState::OutsideList,
            pending_gap: String::new(),
        }
    }

    fn item(&mut self, kind: ListKind, content: &str) {
        match self.state {
            ListState::InsideList(open) if open == kind => self.pending_gap.clear(),
            _ => {
                self.close();
                self.out.push('<');
                self.out.push_str(kind.tag());
                self.out.push('>');
                self.state = ListState::InsideList(kind);
            }
        }
        self.out.push_str("<li>");
        self.out.push_str(content);
        self.out.push_str("</li>");
    }

    /// Verbatim HTML outside of any list
    fn raw(&mut self, html: &str) {
        if html.is_empty() {
            return;
        }
        if matches!(self.state, ListState::InsideList(_)) && html.trim().is_empty() {
            self.pending_gap.push_str(html);
            return;
        }
        self.close();
        self.out.push_str(html);
    }

    fn close(&mut self) {
        if let ListState::InsideList(kind) = self.state {
            self.out.push_str("</");
            self.out.push_str(kind.tag());
            self.out.push('>');
            self.state = ListState::OutsideList;
        }
        let gap = std::mem::take(&mut self.pending_gap);
        self.out.push_str(&gap);
    }

    fn finish(mut self) -> String {
        self.close();
        self.out
    }
}

/// Convert literal markdown bold markers to `<strong>`.
///
/// Only text between tags is rewritten. Tag markup (attribute values
/// included) and text inside `<code>` or `<pre>` are copied as is.
fn fix_bold(body: &str, changes: &mut usize) -> String {
    let mut out = String::with_capacity(body.len());
    let mut literal_depth = 0usize;
    let mut last = 0;

    for caps in TAG_RE.captures_iter(body) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        bold_text(&body[last..tag.start()], literal_depth == 0, &mut out, changes);
        if let Some(name) = caps.get(2) {
            if is_literal_tag(name.as_str()) {
                if caps.get(1).is_some() {
                    literal_depth = literal_depth.saturating_sub(1);
                } else {
                    literal_depth += 1;
                }
            }
        }
        out.push_str(tag.as_str());
        last = tag.end();
    }
    bold_text(&body[last..], literal_depth == 0, &mut out, changes);
    out
}

fn is_literal_tag(name: &str) -> bool {
    name.eq_ignore_ascii_case("code") || name.eq_ignore_ascii_case("pre")
}

fn bold_text(text: &str, rewrite: bool, out: &mut String, changes: &mut usize) {
    if !rewrite || text.is_empty() {
        out.push_str(text);
        return;
    }
    let mut count = BOLD_STARS_RE.find_iter(text).count();
    let text = BOLD_STARS_RE.replace_all(text, "<strong>$1</strong>");
    count += BOLD_UNDERSCORES_RE.find_iter(&text).count();
    let text = BOLD_UNDERSCORES_RE.replace_all(&text, "<strong>$1</strong>");
    *changes += count;
    out.push_str(&text);
}

/// Rewrite one paragraph into `writer`. Returns false, writing nothing,
/// when the paragraph is already clean.
fn fix_paragraph(
    open_tag: &str,
    body: &str,
    writer: &mut ListWriter,
    changes: &mut usize,
) -> bool {
    if BLANK_RE.is_match(body) {
        *changes += 1;
        return true;
    }

    let mut local = 0;
    let body = fix_bold(body, &mut local);
    let lines: Vec<Line> = BR_RE.split(&body).map(classify).collect();

    local += lines
        .iter()
        .filter(|line| !matches!(line, Line::Text(_)))
        .count();
    if local == 0 {
        return false;
    }
    *changes += local;

    let mut text_lines: Vec<&str> = Vec::new();
    for line in &lines {
        match *line {
            Line::Text(text) => text_lines.push(text),
            Line::Heading(level, text) => {
                flush_text(open_tag, &mut text_lines, writer);
                writer.raw(&format!("<h{level}>{text}</h{level}>"));
            }
            Line::Item(kind, text) => {
                flush_text(open_tag, &mut text_lines, writer);
                writer.item(kind, text);
            }
        }
    }
    flush_text(open_tag, &mut text_lines, writer);
    true
}

/// Write collected text lines as one paragraph under the original opening
/// tag. Blank lines at either end are dropped, inner ones are kept.
fn flush_text(open_tag: &str, lines: &mut Vec<&str>, writer: &mut ListWriter) {
    let is_blank = |line: &&str| line.trim().is_empty();
    let start = lines.iter().position(|l| !is_blank(l));
    let end = lines.iter().rposition(|l| !is_blank(l));
    if let (Some(start), Some(end)) = (start, end) {
        writer.raw(&format!("{open_tag}{}</p>", lines[start..=end].join("<br>")));
    }
    lines.clear();
}

/// Fix markdown artefacts in one HTML document
pub fn fix_article_formatting(html: &str) -> FormatFix {
    let mut writer = ListWriter::new(html.len());
    let mut changes = 0;
    let mut last = 0;

    for caps in PARAGRAPH_RE.captures_iter(html) {
        let (Some(whole), Some(open_tag), Some(body)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        writer.raw(&html[last..whole.start()]);
        if !fix_paragraph(open_tag.as_str(), body.as_str(), &mut writer, &mut changes) {
            writer.raw(whole.as_str());
        }
        last = whole.end();
    }
    writer.raw(&html[last..]);

    if changes == 0 {
        return FormatFix {
            html: html.to_string(),
            changes,
        };
    }

    tracing::debug!(changes, "fixed article formatting");
    FormatFix {
        html: writer.finish(),
        changes,
    }
}

/// Fix a batch of documents keyed by id, keeping only the ones that changed
pub fn fix_all<K, S, I>(documents: I) -> FixSummary<K>
where
    I: IntoIterator<Item = (K, S)>,
    S: AsRef<str>,
{
    let mut scanned = 0;
    let mut fixed = Vec::new();

    for (key, html) in documents {
        scanned += 1;
        let fix = fix_article_formatting(html.as_ref());
        if fix.changed() {
            fixed.push((key, fix));
        }
    }

    tracing::info!(scanned, fixed = fixed.len(), "article formatting pass complete");
    FixSummary { scanned, fixed }
}
