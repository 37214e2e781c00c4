//! cssxpath
//!
//! Select elements from HTML documents with CSS selectors. Selectors are
//! translated to XPath 1.0 by [`css`], documents are parsed and queried by
//! [`html`], and matches come back either as raw document nodes or as plain
//! [`Element`] records.
//!
//! # Example
//! ```
//! use cssxpath::select;
//!
//! let found = select("<div><p class=\"x\">Hi <br>there</p></div>", "div > p.x");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "p");
//! assert_eq!(found[0].inner_html, "Hi <br />there");
//! ```

mod assertions;
mod config;
mod element;
mod select;

pub use assertions::{
    AssertionError, Content, Count, CountRange, assert_select, assert_select_count,
    assert_select_count_with_message, assert_select_equals, assert_select_equals_with_message,
    assert_select_regex, assert_select_regex_with_message,
};
pub use config::Config;
pub use element::{Element, close_void_tags};
pub use select::{CssSelect, select, select_document, select_document_nodes};

pub use cssxpath_css::{Translator, css_to_xpath};

// Re-export sub-crates for advanced usage
pub use cssxpath_css as css;
pub use cssxpath_html as html;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
