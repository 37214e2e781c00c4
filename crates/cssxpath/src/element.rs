//! Matched element records

use std::sync::OnceLock;

use cssxpath_html::HtmlSerializer;
use cssxpath_html::sxd_document::dom;
use regex::{Captures, Regex};
use serde::{Serialize, Serializer};

/// Plain snapshot of a matched element
///
/// Serializes as `{"name", "attributes", "innerHTML"}` with attributes as an
/// object in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in declaration order
    #[serde(serialize_with = "serialize_attributes")]
    pub attributes: Vec<(String, String)>,
    /// Children serialized one by one, void tags closed, trimmed
    #[serde(rename = "innerHTML")]
    pub inner_html: String,
}

impl Element {
    /// Snapshot a document element
    pub fn from_dom(element: dom::Element<'_>) -> Self {
        let serializer = HtmlSerializer::new();
        let markup: String = element
            .children()
            .into_iter()
            .map(|child| serializer.serialize_child(child))
            .collect();

        Self {
            name: element.name().local_part().to_string(),
            attributes: element
                .attributes()
                .into_iter()
                .map(|attr| (attr.name().local_part().to_string(), attr.value().to_string()))
                .collect(),
            inner_html: close_void_tags(&markup),
        }
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn serialize_attributes<S: Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attributes.iter().map(|(name, value)| (name, value)))
}

fn void_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let tags = cssxpath_html::VOID_ELEMENTS.join("|");
        Regex::new(&format!(r"<({tags})(\b[^>]*)>")).expect("void tag pattern is valid")
    })
}

/// Rewrite void element tags to self-closing form and trim the result
///
/// `<br>` becomes `<br />`; tags already ending in `/` are left as written.
pub fn close_void_tags(markup: &str) -> String {
    void_tag_pattern()
        .replace_all(markup, |caps: &Captures<'_>| {
            if caps[2].ends_with('/') {
                caps[0].to_string()
            } else {
                format!("<{}{} />", &caps[1], &caps[2])
            }
        })
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_void_tags() {
        assert_eq!(close_void_tags("a<br>b"), "a<br />b");
        assert_eq!(
            close_void_tags(r#"<img src="x.png" alt="">"#),
            r#"<img src="x.png" alt="" />"#
        );
        assert_eq!(close_void_tags("<br/>"), "<br/>");
        assert_eq!(close_void_tags("<br />"), "<br />");
    }

    #[test]
    fn test_close_void_tags_respects_word_boundary() {
        assert_eq!(close_void_tags("<colgroup></colgroup>"), "<colgroup></colgroup>");
        assert_eq!(close_void_tags("<col span=\"2\">"), "<col span=\"2\" />");
        assert_eq!(close_void_tags("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_close_void_tags_trims() {
        assert_eq!(close_void_tags("\n  <hr>\n"), "<hr />");
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element {
            name: "a".to_string(),
            attributes: vec![("href".to_string(), "#".to_string())],
            inner_html: String::new(),
        };
        assert_eq!(element.attribute("href"), Some("#"));
        assert_eq!(element.attribute("title"), None);
    }
}
