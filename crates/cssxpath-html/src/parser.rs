//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into an `sxd_document` package.
//! Elements and attributes are created without a namespace so that plain
//! XPath name tests (`//div`, `@href`) match.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use sxd_document::Package;
use sxd_document::dom::{Comment, Document, Element, Root, Text};

/// Comment text of the placeholder document built for empty input
pub const DEFAULT_EMPTY_DOCUMENT: &str = " empty document ";

/// HTML5 parser
#[derive(Debug, Clone)]
pub struct HtmlParser {
    empty_document: String,
    preserve_whitespace: bool,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self {
            empty_document: DEFAULT_EMPTY_DOCUMENT.to_string(),
            preserve_whitespace: true,
        }
    }

    /// Comment placed in the otherwise empty document built for `""`
    pub fn empty_document(mut self, comment: impl Into<String>) -> Self {
        self.empty_document = comment.into();
        self
    }

    /// Keep whitespace-only text nodes
    pub fn preserve_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_whitespace = preserve;
        self
    }

    /// Parse an HTML string
    ///
    /// Never fails: malformed markup is recovered the way browsers do. An
    /// empty string yields a document with a single comment and no elements.
    pub fn parse(&self, html: &str) -> Package {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let package = Package::new();
        let mut nodes = 0;
        {
            let document = package.as_document();
            let root = Parent::Root(document.root());
            if html.is_empty() {
                root.append_comment(document.create_comment(&self.empty_document));
                nodes += 1;
            } else {
                let dom = parse_document(RcDom::default(), Default::default()).one(html);
                self.convert_node(&dom.document, &document, root, &mut nodes);
            }
        }

        tracing::debug!("Parsed {} nodes", nodes);
        package
    }

    /// Convert an RcDom node into the target document
    fn convert_node<'d>(
        &self,
        handle: &Handle,
        document: &Document<'d>,
        parent: Parent<'d>,
        nodes: &mut usize,
    ) {
        match &handle.data {
            NodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, document, parent, nodes);
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let tag: &str = &name.local;
                let element = document.create_element(tag);
                for attr in attrs.borrow().iter() {
                    let attr_name: &str = &attr.name.local;
                    element.set_attribute_value(attr_name, &attr.value);
                }
                parent.append_element(element);
                *nodes += 1;

                // template contents live outside `children` and are dropped
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, document, Parent::Element(element), nodes);
                }
            }
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                if !self.preserve_whitespace && contents.trim().is_empty() {
                    return;
                }
                if parent.append_text(document.create_text(&contents)) {
                    *nodes += 1;
                }
            }
            NodeData::Comment { contents } => {
                parent.append_comment(document.create_comment(contents));
                *nodes += 1;
            }
            NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {}
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Insertion point in the target document
#[derive(Clone, Copy)]
enum Parent<'d> {
    Root(Root<'d>),
    Element(Element<'d>),
}

impl<'d> Parent<'d> {
    fn append_element(self, element: Element<'d>) {
        match self {
            Parent::Root(root) => root.append_child(element),
            Parent::Element(parent) => parent.append_child(element),
        }
    }

    fn append_comment(self, comment: Comment<'d>) {
        match self {
            Parent::Root(root) => root.append_child(comment),
            Parent::Element(parent) => parent.append_child(comment),
        }
    }

    /// Text cannot be a child of the root; returns whether it was attached
    fn append_text(self, text: Text<'d>) -> bool {
        match self {
            Parent::Root(_) => false,
            Parent::Element(parent) => {
                parent.append_child(text);
                true
            }
        }
    }
}
