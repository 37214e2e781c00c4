//! Attribute selector clauses
//!
//! Compiles the inside of `[...]` into an XPath predicate.

use std::sync::OnceLock;

use regex::Regex;

/// Comparison operator of an attribute selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `=` exact value
    Equals,
    /// `~=` whitespace-separated token
    Includes,
    /// `|=` exact value or value followed by `-`
    DashMatch,
    /// `^=` prefix
    Prefix,
    /// `$=` suffix
    Suffix,
    /// `*=` substring
    Substring,
    /// `!=` negated exact value (jQuery)
    NotEquals,
}

impl AttributeOperator {
    /// Parse from the operator token
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Equals),
            "~=" => Some(Self::Includes),
            "|=" => Some(Self::DashMatch),
            "^=" => Some(Self::Prefix),
            "$=" => Some(Self::Suffix),
            "*=" => Some(Self::Substring),
            "!=" => Some(Self::NotEquals),
            _ => None,
        }
    }

    /// Operator token as written in CSS
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Includes => "~=",
            Self::DashMatch => "|=",
            Self::Prefix => "^=",
            Self::Suffix => "$=",
            Self::Substring => "*=",
            Self::NotEquals => "!=",
        }
    }

    /// XPath predicate comparing attribute `name` against `value`
    pub fn clause(self, name: &str, value: &str) -> String {
        match self {
            Self::Equals => format!(r#"[@{name}="{value}"]"#),
            Self::Includes => format!(r#"[contains(concat(" ", @{name}, " "), " {value} ")]"#),
            Self::DashMatch => format!(r#"[starts-with(concat(@{name}, "-"), "{value}-")]"#),
            Self::Prefix => format!(r#"[starts-with(@{name}, "{value}")]"#),
            // XPath 2.0 function; XPath 1.0 evaluators reject it
            Self::Suffix => format!(r#"[ends-with(@{name}, "{value}")]"#),
            Self::Substring => format!(r#"[contains(@{name}, "{value}")]"#),
            Self::NotEquals => format!(r#"[@{name}!="{value}"]"#),
        }
    }
}

fn condition_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(.*?)(=|~=|\|=|\^=|\$=|\*=|!=)['"]?(.*?)['"]?$"#)
            .expect("attribute condition pattern is valid")
    })
}

/// Compile the contents of an attribute selector (without brackets)
///
/// Quotes around the value are dropped. Contents without an operator become
/// a presence test, so `id` yields `[@id]`.
pub fn attribute_clause(contents: &str) -> String {
    let Some(caps) = condition_pattern().captures(contents) else {
        return format!("[@{contents}]");
    };
    match AttributeOperator::parse(&caps[2]) {
        Some(operator) => operator.clause(&caps[1], &caps[3]),
        None => format!("[@{contents}]"),
    }
}
