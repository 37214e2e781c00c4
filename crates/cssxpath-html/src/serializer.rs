//! HTML Serialization (innerHTML/outerHTML)
//!
//! Serializes document nodes back to HTML:
//! - void elements are written without end tag and without `/`
//! - text and attribute values are escaped
//! - `script` and `style` content is written raw

use sxd_document::dom::{ChildOfElement, Element};

/// Void elements (no end tag)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Boolean attributes written as a bare name when their value is empty
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "checked", "compact", "declare", "defer", "disabled", "ismap", "multiple", "nohref",
    "noresize", "noshade", "nowrap", "readonly", "selected",
];

/// Raw text elements (no escaping for content)
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize innerHTML of an element (children only)
    pub fn serialize_inner(&self, element: Element<'_>) -> String {
        let mut output = String::new();
        for child in element.children() {
            self.write_child(child, &mut output);
        }
        output
    }

    /// Serialize outerHTML of an element (including the element itself)
    pub fn serialize_outer(&self, element: Element<'_>) -> String {
        let mut output = String::new();
        self.write_element(element, &mut output);
        output
    }

    /// Serialize a single child node
    pub fn serialize_child(&self, child: ChildOfElement<'_>) -> String {
        let mut output = String::new();
        self.write_child(child, &mut output);
        output
    }

    fn write_child(&self, child: ChildOfElement<'_>, output: &mut String) {
        match child {
            ChildOfElement::Element(element) => self.write_element(element, output),
            ChildOfElement::Text(text) => {
                let raw = text
                    .parent()
                    .is_some_and(|parent| RAW_TEXT_ELEMENTS.contains(&parent.name().local_part()));
                if raw {
                    output.push_str(text.text());
                } else {
                    escape_text(text.text(), output);
                }
            }
            ChildOfElement::Comment(comment) => {
                output.push_str("<!--");
                output.push_str(comment.text());
                output.push_str("-->");
            }
            ChildOfElement::ProcessingInstruction(pi) => {
                output.push_str("<?");
                output.push_str(pi.target());
                if let Some(value) = pi.value() {
                    output.push(' ');
                    output.push_str(value);
                }
                output.push_str("?>");
            }
        }
    }

    fn write_element(&self, element: Element<'_>, output: &mut String) {
        let tag = element.name().local_part();

        output.push('<');
        output.push_str(tag);
        for attr in element.attributes() {
            output.push(' ');
            let name = attr.name().local_part();
            output.push_str(name);
            if !(attr.value().is_empty() && BOOLEAN_ATTRIBUTES.contains(&name)) {
                output.push_str("=\"");
                escape_attribute(attr.value(), output);
                output.push('"');
            }
        }
        output.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        for child in element.children() {
            self.write_child(child, output);
        }
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
