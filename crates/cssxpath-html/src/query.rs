//! XPath evaluation over a parsed document

use std::sync::OnceLock;

use regex::Regex;
use sxd_document::dom::{Document, Element, Root};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

use crate::QueryError;

/// Namespace bound to every prefix in an expression
///
/// Parsed documents carry no namespaces, so a prefixed name test such as
/// `a:hover` matches nothing instead of failing to resolve.
pub const UNBOUND_NAMESPACE: &str = "urn:cssxpath:unbound";

/// XPath evaluation context bound to one document
///
/// Expressions are evaluated from the document root. Results borrow the
/// document, not the context, so the context can be dropped while the nodes
/// are still in use.
pub struct QueryContext<'d> {
    root: Root<'d>,
    factory: Factory,
}

impl<'d> QueryContext<'d> {
    /// Bind a context to a document
    pub fn new(document: &Document<'d>) -> Self {
        Self {
            root: document.root(),
            factory: Factory::new(),
        }
    }

    /// Evaluate an expression and return the matched nodes in document order
    ///
    /// Expressions that produce a string, number or boolean match nothing.
    pub fn evaluate(&self, xpath: &str) -> Result<Vec<Node<'d>>, QueryError> {
        if xpath.trim().is_empty() {
            return Err(QueryError::Empty {
                xpath: xpath.to_string(),
            });
        }

        let compiled = self
            .factory
            .build(xpath)
            .map_err(|e| QueryError::Compile {
                xpath: xpath.to_string(),
                message: format!("{e:?}"),
            })?
            .ok_or_else(|| QueryError::Empty {
                xpath: xpath.to_string(),
            })?;

        let mut context = Context::new();
        for prefix in name_prefixes(xpath) {
            context.set_namespace(prefix, UNBOUND_NAMESPACE);
        }

        let value = compiled
            .evaluate(&context, self.root)
            .map_err(|e| QueryError::Evaluate {
                xpath: xpath.to_string(),
                message: format!("{e:?}"),
            })?;

        Ok(match value {
            Value::Nodeset(nodes) => nodes.document_order(),
            _ => Vec::new(),
        })
    }

    /// Evaluate an expression and keep only element matches
    pub fn elements(&self, xpath: &str) -> Result<Vec<Element<'d>>, QueryError> {
        Ok(self
            .evaluate(xpath)?
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                _ => None,
            })
            .collect())
    }
}

/// Every `prefix:` in front of a name, skipping `::` axes
fn name_prefixes(xpath: &str) -> impl Iterator<Item = &str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"([\p{L}_][\w.-]*):[\p{L}_*]").expect("name prefix pattern is valid")
        })
        .captures_iter(xpath)
        .filter_map(|caps| caps.get(1))
        .map(|prefix| prefix.as_str())
}
