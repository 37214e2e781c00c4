//! cssxpath HTML Collaborator
//!
//! Tolerant HTML parsing built on html5ever, converted into an
//! `sxd_document` tree so that XPath 1.0 expressions can be evaluated with
//! `sxd_xpath`. Also serializes individual nodes back to markup.

mod parser;
mod query;
mod serializer;

pub use parser::{DEFAULT_EMPTY_DOCUMENT, HtmlParser};
pub use query::{QueryContext, UNBOUND_NAMESPACE};
pub use serializer::{BOOLEAN_ATTRIBUTES, HtmlSerializer, RAW_TEXT_ELEMENTS, VOID_ELEMENTS};

pub use sxd_document;
pub use sxd_xpath;

use sxd_document::Package;

/// Parse an HTML string into an XPath-capable document
pub fn parse(html: &str) -> Package {
    HtmlParser::new().parse(html)
}

/// XPath query error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid XPath {xpath:?}: {message}")]
    Compile { xpath: String, message: String },

    #[error("Empty XPath expression {xpath:?}")]
    Empty { xpath: String },

    #[error("Failed to evaluate {xpath:?}: {message}")]
    Evaluate { xpath: String, message: String },
}
