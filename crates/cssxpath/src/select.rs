//! Selection entry points
//!
//! A selector that translates to an expression the evaluator rejects is not
//! an error here: it matches nothing.

use cssxpath_css::css_to_xpath;
use cssxpath_html::QueryContext;
use cssxpath_html::sxd_document::Package;
use cssxpath_html::sxd_document::dom::Document;
use cssxpath_html::sxd_xpath::nodeset::Node;

use crate::config::Config;
use crate::element::Element;

/// Select elements from an HTML string
pub fn select(html: &str, selector: &str) -> Vec<Element> {
    let package = cssxpath_html::parse(html);
    select_document(&package.as_document(), selector)
}

/// Select elements from an already parsed document
pub fn select_document(document: &Document<'_>, selector: &str) -> Vec<Element> {
    select_document_nodes(document, selector)
        .into_iter()
        .filter_map(|node| match node {
            Node::Element(element) => Some(Element::from_dom(element)),
            _ => None,
        })
        .collect()
}

/// Select raw nodes from an already parsed document
///
/// Non-element matches (text, attributes, comments) are returned as well.
pub fn select_document_nodes<'d>(document: &Document<'d>, selector: &str) -> Vec<Node<'d>> {
    let xpath = css_to_xpath(selector);
    match QueryContext::new(document).evaluate(&xpath) {
        Ok(nodes) => {
            tracing::trace!(selector, %xpath, matches = nodes.len(), "selected");
            nodes
        }
        Err(e) => {
            tracing::debug!(selector, error = %e, "selector matched nothing");
            Vec::new()
        }
    }
}

/// Selector bound to a stored document
///
/// Raw nodes borrow the stored document, so markup parsed here can be
/// queried for nodes repeatedly without reparsing.
pub struct CssSelect {
    package: Package,
    config: Config,
}

impl CssSelect {
    /// Parse markup with the default configuration
    pub fn new(html: &str) -> Self {
        Self::with_config(html, Config::default())
    }

    /// Parse markup with the given configuration
    pub fn with_config(html: &str, config: Config) -> Self {
        Self {
            package: config.parser().parse(html),
            config,
        }
    }

    /// Wrap an already parsed document
    pub fn from_package(package: Package) -> Self {
        Self {
            package,
            config: Config::default(),
        }
    }

    /// Replace the stored document
    pub fn set_html(&mut self, html: &str) {
        self.package = self.config.parser().parse(html);
    }

    /// Select elements from the stored document
    pub fn select(&self, selector: &str) -> Vec<Element> {
        select_document(&self.package.as_document(), selector)
    }

    /// Select raw nodes from the stored document
    pub fn select_nodes(&self, selector: &str) -> Vec<Node<'_>> {
        select_document_nodes(&self.package.as_document(), selector)
    }

    /// The stored document
    pub fn document(&self) -> Document<'_> {
        self.package.as_document()
    }

    /// Configuration used for markup passed to [`CssSelect::set_html`]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_from_string() {
        let found = select("<div><p>one</p><p>two</p></div>", "div p");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].inner_html, "two");
    }

    #[test]
    fn test_invalid_xpath_matches_nothing() {
        assert!(select("<div></div>", "").is_empty());
        assert!(select("<div></div>", "bo $ us").is_empty());
    }

    #[test]
    fn test_stored_document_is_reused() {
        let mut css = CssSelect::new("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(css.select("li").len(), 2);
        assert_eq!(css.select_nodes("li").len(), 2);

        css.set_html("<p>x</p>");
        assert!(css.select("li").is_empty());
        assert_eq!(css.select("p").len(), 1);
    }

    #[test]
    fn test_from_package() {
        let css = CssSelect::from_package(cssxpath_html::parse("<a href=\"#\">x</a>"));
        let found = css.select("a[href=#]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attribute("href"), Some("#"));
    }

    #[test]
    fn test_set_html_keeps_config() {
        let config = Config {
            preserve_whitespace: false,
            ..Config::default()
        };
        let mut css = CssSelect::with_config("", config);
        css.set_html("<ul>\n <li>a</li>\n <li>b</li>\n</ul>");
        assert_eq!(css.select("ul")[0].inner_html, "<li>a</li><li>b</li>");
        assert!(!css.config().preserve_whitespace);
    }
}
