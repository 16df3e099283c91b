#![deny(clippy::all)]

use std::sync::{Arc, Mutex};

use napi_derive::napi;

use blockhtml::{
    blocks_from_json, blocks_to_json, fix_article_formatting, serialize, BlockHtmlError,
    BlockParser, EditorSession as RustEditorSession, HighlightOutput, Options,
};

#[napi(object)]
pub struct SerializeOptions {
    pub link_class: Option<String>,
    pub highlight: Option<String>,
    pub separator: Option<String>,
}

impl From<SerializeOptions> for Options {
    fn from(opts: SerializeOptions) -> Self {
        let mut result = Options::default();

        if let Some(class) = opts.link_class {
            result.link_class = class;
        }

        if let Some(highlight) = opts.highlight {
            result.highlight = match highlight.to_lowercase().as_str() {
                "mark" => HighlightOutput::Mark,
                _ => HighlightOutput::Drop,
            };
        }

        if let Some(separator) = opts.separator {
            result.separator = separator;
        }

        result
    }
}

#[napi(object)]
pub struct FormatFixResult {
    pub html: String,
    pub changes: u32,
}

fn to_napi(err: BlockHtmlError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

/// Convert HTML to the editor's JSON block array
#[napi]
pub fn html_to_blocks(html: String) -> napi::Result<String> {
    blocks_to_json(&BlockParser::new().parse(&html)).map_err(to_napi)
}

/// Convert a JSON block array to HTML
#[napi]
pub fn blocks_to_html(json: String, options: Option<SerializeOptions>) -> napi::Result<String> {
    let blocks = blocks_from_json(&json).map_err(to_napi)?;
    let options = options.map(Options::from).unwrap_or_default();
    Ok(serialize(&blocks, &options))
}

/// Repair markdown left in stored article HTML
#[napi]
pub fn fix_formatting(html: String) -> FormatFixResult {
    let fix = fix_article_formatting(&html);
    FormatFixResult {
        html: fix.html,
        changes: u32::try_from(fix.changes).unwrap_or(u32::MAX),
    }
}

type ChangeCallback = Box<dyn FnMut(&str) + Send>;

#[napi]
pub struct EditorSession {
    inner: RustEditorSession<ChangeCallback>,
    last_html: Arc<Mutex<String>>,
}

#[napi]
impl EditorSession {
    #[napi(constructor)]
    pub fn new(initial_content: Option<String>, options: Option<SerializeOptions>) -> Self {
        let last_html = Arc::new(Mutex::new(String::new()));
        let slot = Arc::clone(&last_html);
        let on_change: ChangeCallback = Box::new(move |html: &str| {
            if let Ok(mut last) = slot.lock() {
                last.clear();
                last.push_str(html);
            }
        });

        let inner = RustEditorSession::with_parser(
            &BlockParser::new(),
            options.map(Options::from).unwrap_or_default(),
            initial_content.as_deref(),
            on_change,
        );
        Self { inner, last_html }
    }

    /// Current document as a JSON block array
    #[napi]
    pub fn blocks(&self) -> napi::Result<String> {
        blocks_to_json(self.inner.document()).map_err(to_napi)
    }

    /// Current document as HTML
    #[napi]
    pub fn html(&self) -> String {
        self.inner.html()
    }

    /// Replace the document with the editor's tree and return the new HTML
    #[napi]
    pub fn update(&mut self, json: String) -> napi::Result<String> {
        let blocks = blocks_from_json(&json).map_err(to_napi)?;
        self.inner.replace_document(blocks);

        let last = self
            .last_html
            .lock()
            .map_err(|e| napi::Error::from_reason(e.to_string()))?;
        Ok(last.clone())
    }
}
