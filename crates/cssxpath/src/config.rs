//! Document Configuration

use cssxpath_html::{DEFAULT_EMPTY_DOCUMENT, HtmlParser};

/// Options for documents built from markup strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Comment text of the placeholder document used for empty markup
    pub empty_document: String,

    /// Keep whitespace-only text nodes
    pub preserve_whitespace: bool,
}

impl Config {
    /// Parser configured with these options
    pub fn parser(&self) -> HtmlParser {
        HtmlParser::new()
            .empty_document(self.empty_document.clone())
            .preserve_whitespace(self.preserve_whitespace)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_document: DEFAULT_EMPTY_DOCUMENT.to_string(),
            preserve_whitespace: true,
        }
    }
}
