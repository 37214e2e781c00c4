//! Edge case tests for cssxpath-html
//!
//! Malformed markup, special tags and unusual expressions.

use cssxpath_html::{HtmlSerializer, QueryContext, QueryError, parse};

fn count(html: &str, xpath: &str) -> usize {
    let package = parse(html);
    let document = package.as_document();
    QueryContext::new(&document)
        .elements(xpath)
        .map(|elements| elements.len())
        .unwrap_or(0)
}

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_empty_input_matches_nothing() {
    assert_eq!(count("", "//*"), 0);
    assert_eq!(count("", "//html"), 0);
}

#[test]
fn test_whitespace_input_gets_implied_structure() {
    assert_eq!(count("   \t\n", "//body"), 1);
}

#[test]
fn test_text_only_input() {
    assert_eq!(count("Hello World", "//body"), 1);
}

#[test]
fn test_parse_null_bytes() {
    assert_eq!(count("<p>Hello\0World</p>", "//p"), 1);
}

// ============================================================================
// MALFORMED HTML
// ============================================================================

#[test]
fn test_unclosed_tags() {
    assert_eq!(count("<div><p><span>text", "//div/p/span"), 1);
}

#[test]
fn test_extra_closing_tags() {
    assert_eq!(count("<div></div></div></div>", "//div"), 1);
}

#[test]
fn test_implicitly_closed_list_items() {
    assert_eq!(count("<ul><li>a<li>b<li>c</ul>", "//ul/li"), 3);
}

#[test]
fn test_processing_instruction_is_dropped() {
    let package = parse(r#"<?xml encoding="UTF-8"?><p>x</p>"#);
    let document = package.as_document();
    let context = QueryContext::new(&document);
    assert!(context.evaluate("//processing-instruction()").unwrap().is_empty());
}

// ============================================================================
// SPECIAL TAGS
// ============================================================================

#[test]
fn test_script_content_is_raw() {
    let package = parse("<script>if (a < b && c) {}</script>");
    let document = package.as_document();
    let context = QueryContext::new(&document);

    let script = context.elements("//script").unwrap()[0];
    assert_eq!(
        HtmlSerializer::new().serialize_inner(script),
        "if (a < b && c) {}"
    );
}

#[test]
fn test_textarea_content_is_text() {
    assert_eq!(count("<textarea><div>x</div></textarea>", "//div"), 0);
}

#[test]
fn test_template_contents_are_dropped() {
    assert_eq!(count("<template><p>x</p></template>", "//template"), 1);
    assert_eq!(count("<template><p>x</p></template>", "//p"), 0);
}

#[test]
fn test_attribute_value_escaping() {
    let package = parse(r#"<p title='say "hi" &amp; go'>x</p>"#);
    let document = package.as_document();
    let context = QueryContext::new(&document);

    let p = context.elements("//p").unwrap()[0];
    assert_eq!(
        HtmlSerializer::new().serialize_outer(p),
        r#"<p title="say &quot;hi&quot; &amp; go">x</p>"#
    );
}

#[test]
fn test_empty_attribute_values() {
    let package = parse(r#"<div><img src="a.png" alt=""><input type="checkbox" checked value=""></div>"#);
    let document = package.as_document();
    let context = QueryContext::new(&document);

    let div = context.elements("//div").unwrap()[0];
    assert_eq!(
        HtmlSerializer::new().serialize_inner(div),
        r#"<img src="a.png" alt=""><input type="checkbox" checked value="">"#
    );
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[test]
fn test_translated_quirks_do_not_compile() {
    let package = parse("<a href='#'><img></a>");
    let document = package.as_document();
    let context = QueryContext::new(&document);

    assert!(matches!(context.evaluate("//"), Err(QueryError::Compile { .. })));
    assert!(matches!(context.evaluate("   "), Err(QueryError::Empty { .. })));
}

#[test]
fn test_unsupported_pseudo_classes_match_nothing() {
    let html = r##"<ul><li>a</li></ul><a href="#">b</a><p></p>"##;
    assert_eq!(count(html, "//li:focus"), 0);
    assert_eq!(count(html, "//a:visited"), 0);
    assert_eq!(count(html, "//p:empty"), 0);
    assert_eq!(count(html, "//ul/li:focus|//ul/li"), 1);
}

#[test]
fn test_prefixed_name_test_is_not_an_error() {
    let package = parse("<ul><li>a</li></ul>");
    let document = package.as_document();
    let context = QueryContext::new(&document);
    assert!(context.evaluate("//li:focus").unwrap().is_empty());
}

#[test]
fn test_error_display() {
    let error = QueryError::Empty {
        xpath: String::new(),
    };
    assert_eq!(error.to_string(), r#"Empty XPath expression """#);
}
