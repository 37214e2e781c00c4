//! Edge case tests for cssxpath
//!
//! Selectors whose translations do not compile or match nothing, odd
//! documents and unusual matches.

use cssxpath::{Config, CssSelect, close_void_tags, css_to_xpath, select};

// ============================================================================
// SELECTORS THAT MATCH NOTHING
// ============================================================================

#[test]
fn test_empty_selector() {
    assert_eq!(css_to_xpath(""), "//");
    assert!(select("<p>x</p>", "").is_empty());
}

#[test]
fn test_scope_alone() {
    assert_eq!(css_to_xpath(":scope"), "");
    assert!(select("<p>x</p>", ":scope").is_empty());
}

#[test]
fn test_has_is_not_supported() {
    assert!(select("<a><img></a>", "a:has(> img)").is_empty());
}

#[test]
fn test_suffix_operator_has_no_xpath1_function() {
    assert!(select(r#"<p foo="xbar">x</p>"#, "[foo$=bar]").is_empty());
}

#[test]
fn test_unknown_pseudo_class() {
    assert!(select("<a>x</a>", "a:hover").is_empty());
    assert!(select("<ul><li>a</li></ul>", "li:focus").is_empty());
    assert!(select("<a href=\"#\">x</a>", "a:visited").is_empty());
    assert!(select("<p></p>", "p:empty").is_empty());
}

#[test]
fn test_unknown_pseudo_class_in_union() {
    let found = select("<ul><li>a</li></ul><p>x</p>", "li:focus, p");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "p");
}

// ============================================================================
// EXPERIMENTAL RELATIONAL SHORTHAND
// ============================================================================

#[test]
fn test_relational_selects_parent() {
    let html = r##"<ul><li>plain</li><li><a href="#">link</a></li></ul>"##;
    let found = select(html, "ul li! > a");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "li");
    assert_eq!(found[0].inner_html, r##"<a href="#">link</a>"##);
}

// ============================================================================
// ATTRIBUTES AND PSEUDO-CLASSES
// ============================================================================

#[test]
fn test_attribute_value_with_comma_and_space() {
    let html = r#"<p data-x="a, b">1</p><p data-x="a">2</p>"#;
    let found = select(html, r#"[data-x="a, b"]"#);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].inner_html, "1");
}

#[test]
fn test_form_pseudo_classes() {
    let html = r#"
        <form>
            <input type="text" name="q" required>
            <input type="checkbox" checked>
            <input type="submit">
            <button>Go</button>
            <button type="button">Nope</button>
            <select><option selected>a</option></select>
            <textarea></textarea>
        </form>"#;

    assert_eq!(select(html, "input:text").len(), 1);
    assert_eq!(select(html, "input:checkbox").len(), 1);
    assert_eq!(select(html, "input:checked").len(), 1);
    assert_eq!(select(html, "input:required").len(), 1);
    assert_eq!(select(html, "option:selected").len(), 1);
    assert_eq!(select(html, ":button").len(), 2);
    assert_eq!(select(html, ":submit").len(), 2);
    assert_eq!(select(html, ":input").len(), 7);
}

#[test]
fn test_prefix_and_hyphen_operators() {
    let html = r#"<p lang="en-US">a</p><p lang="en">b</p><p lang="fr">c</p>"#;
    assert_eq!(select(html, "[lang|=en]").len(), 2);
    assert_eq!(select(html, "[lang^=e]").len(), 2);
    assert_eq!(select(html, "[lang*=US]").len(), 1);
    assert_eq!(select(html, "p[lang!=fr]").len(), 2);
}

// ============================================================================
// DOCUMENTS
// ============================================================================

#[test]
fn test_malformed_document() {
    let found = select("<ul><li>a<li>b</ul><p>x", "ul > li");
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].inner_html, "b");
}

#[test]
fn test_custom_empty_document_still_matches_nothing() {
    let config = Config {
        empty_document: "nothing here".to_string(),
        ..Config::default()
    };
    let css = CssSelect::with_config("", config);
    assert!(css.select("*").is_empty());
}

#[test]
fn test_utf8_content() {
    let found = select("<p class=\"ü\">héllo ✓</p>", "p");
    assert_eq!(found[0].inner_html, "héllo ✓");
    assert_eq!(found[0].attribute("class"), Some("ü"));
}

#[test]
fn test_whitespace_only_inner_html_is_trimmed() {
    let found = select("<div>\n   \n</div>", "div");
    assert_eq!(found[0].inner_html, "");
}

#[test]
fn test_close_void_tags_leaves_closed_tags() {
    assert_eq!(close_void_tags("<br/><br />"), "<br/><br />");
}
