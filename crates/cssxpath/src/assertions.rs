//! DOM assertions
//!
//! Count elements matching a selector, optionally filtered by their inner
//! markup, and compare against an expected count.
//!
//! ```
//! use cssxpath::{Count, CountRange, assert_select_count, assert_select_equals};
//!
//! let html = r#"<div class="name"></div><div class="name">Jimmy</div>"#;
//! assert_select_count(".name", Count::Exactly(2), html).unwrap();
//! assert_select_equals(".name", "Jim", true, html).unwrap();
//! assert_select_equals(".name", "", CountRange::new().lt(2).gt(0), html).unwrap();
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::select::select;

/// Assertion failure
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error("Invalid count: range should set lt, le, gt and/or ge")]
    InvalidCount,

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{}", describe_mismatch(.selector, .expected, .actual, .message))]
    CountMismatch {
        selector: String,
        expected: Count,
        actual: usize,
        message: String,
    },
}

fn describe_mismatch(selector: &str, expected: &Count, actual: &usize, message: &str) -> String {
    let detail = format!("selector {selector:?} matched {actual} element(s), expected {expected}");
    if message.is_empty() {
        detail
    } else {
        format!("{message}: {detail}")
    }
}

/// Expected number of matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// At least one
    Present,
    /// None
    Absent,
    Exactly(usize),
    Range(CountRange),
}

impl Count {
    /// Whether `actual` satisfies this count
    pub fn check(&self, actual: usize) -> Result<bool, AssertionError> {
        Ok(match self {
            Count::Present => actual > 0,
            Count::Absent => actual == 0,
            Count::Exactly(expected) => actual == *expected,
            Count::Range(range) => range.check(actual)?,
        })
    }
}

impl From<bool> for Count {
    fn from(present: bool) -> Self {
        if present { Count::Present } else { Count::Absent }
    }
}

impl From<usize> for Count {
    fn from(count: usize) -> Self {
        Count::Exactly(count)
    }
}

impl From<CountRange> for Count {
    fn from(range: CountRange) -> Self {
        Count::Range(range)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Present => f.write_str("at least 1"),
            Count::Absent => f.write_str("0"),
            Count::Exactly(count) => write!(f, "{count}"),
            Count::Range(range) => write!(f, "{range}"),
        }
    }
}

/// Bounds on the number of matches; every bound that is set must hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountRange {
    pub lt: Option<usize>,
    pub le: Option<usize>,
    pub gt: Option<usize>,
    pub ge: Option<usize>,
}

impl CountRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lt(mut self, bound: usize) -> Self {
        self.lt = Some(bound);
        self
    }

    pub fn le(mut self, bound: usize) -> Self {
        self.le = Some(bound);
        self
    }

    pub fn gt(mut self, bound: usize) -> Self {
        self.gt = Some(bound);
        self
    }

    pub fn ge(mut self, bound: usize) -> Self {
        self.ge = Some(bound);
        self
    }

    /// No bound set
    pub fn is_empty(&self) -> bool {
        self.lt.is_none() && self.le.is_none() && self.gt.is_none() && self.ge.is_none()
    }

    fn check(&self, actual: usize) -> Result<bool, AssertionError> {
        if self.is_empty() {
            return Err(AssertionError::InvalidCount);
        }
        Ok(self.lt.is_none_or(|bound| actual < bound)
            && self.le.is_none_or(|bound| actual <= bound)
            && self.gt.is_none_or(|bound| actual > bound)
            && self.ge.is_none_or(|bound| actual >= bound))
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = [("<", self.lt), ("<=", self.le), (">", self.gt), (">=", self.ge)];
        let parts: Vec<String> = bounds
            .iter()
            .filter_map(|(op, bound)| bound.map(|bound| format!("{op} {bound}")))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Filter applied to the inner markup of each match
#[derive(Debug, Clone)]
pub enum Content {
    /// Every match counts
    Any,
    /// Only matches with empty inner markup
    Empty,
    /// Inner markup contains the text
    Contains(String),
    /// Inner markup matches the pattern
    Matches(Regex),
}

impl Content {
    /// Parse a content filter: `""` is [`Content::Empty`], `regexp:<pattern>`
    /// is [`Content::Matches`], anything else is [`Content::Contains`]
    pub fn parse(content: &str) -> Result<Self, AssertionError> {
        if content.is_empty() {
            return Ok(Content::Empty);
        }
        if let Some(caps) = regexp_prefix().captures(content) {
            return compile_pattern(&caps[1]).map(Content::Matches);
        }
        Ok(Content::Contains(content.to_string()))
    }

    /// Whether the inner markup passes the filter
    pub fn matches(&self, inner_html: &str) -> bool {
        match self {
            Content::Any => true,
            Content::Empty => inner_html.is_empty(),
            Content::Contains(text) => inner_html.contains(text.as_str()),
            Content::Matches(pattern) => pattern.is_match(inner_html),
        }
    }
}

fn regexp_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^regexp\s*:\s*(.*)").expect("regexp prefix is valid"))
}

/// Compile `/body/flags` or a bare pattern
///
/// Flags `i`, `m`, `s`, `x` and `U` become inline flags; others are ignored.
fn compile_pattern(pattern: &str) -> Result<Regex, AssertionError> {
    let (body, flags) = split_delimiters(pattern).unwrap_or((pattern, ""));
    let inline: String = flags
        .chars()
        .filter(|flag| matches!(*flag, 'i' | 'm' | 's' | 'x' | 'U'))
        .collect();
    let source = if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{inline}){body}")
    };
    Regex::new(&source).map_err(|source| AssertionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn split_delimiters(pattern: &str) -> Option<(&str, &str)> {
    let open = pattern.chars().next()?;
    if open.is_alphanumeric() || open.is_whitespace() || open == '\\' {
        return None;
    }
    let close = match open {
        '(' => ')',
        '{' => '}',
        '[' => ']',
        '<' => '>',
        other => other,
    };
    let end = pattern.rfind(close)?;
    if end < open.len_utf8() {
        return None;
    }
    let flags = &pattern[end + close.len_utf8()..];
    if !flags.chars().all(|flag| flag.is_ascii_alphabetic()) {
        return None;
    }
    Some((&pattern[open.len_utf8()..end], flags))
}

/// Assert the number of elements matching `selector` whose inner markup
/// passes `content`
pub fn assert_select(
    selector: &str,
    content: &Content,
    count: impl Into<Count>,
    html: &str,
    message: &str,
) -> Result<(), AssertionError> {
    let count = count.into();
    if matches!(count, Count::Range(range) if range.is_empty()) {
        return Err(AssertionError::InvalidCount);
    }

    let actual = select(html, selector)
        .iter()
        .filter(|element| content.matches(&element.inner_html))
        .count();
    tracing::trace!(selector, actual, expected = %count, "assert select");

    if count.check(actual)? {
        Ok(())
    } else {
        Err(AssertionError::CountMismatch {
            selector: selector.to_string(),
            expected: count,
            actual,
            message: message.to_string(),
        })
    }
}

/// Assert presence, absence or number of elements matching `selector`
pub fn assert_select_count(
    selector: &str,
    count: impl Into<Count>,
    html: &str,
) -> Result<(), AssertionError> {
    assert_select_count_with_message(selector, count, html, "")
}

pub fn assert_select_count_with_message(
    selector: &str,
    count: impl Into<Count>,
    html: &str,
    message: &str,
) -> Result<(), AssertionError> {
    assert_select(selector, &Content::Any, count, html, message)
}

/// Assert the number of matches whose inner markup passes `content`
///
/// `content` follows [`Content::parse`].
pub fn assert_select_equals(
    selector: &str,
    content: &str,
    count: impl Into<Count>,
    html: &str,
) -> Result<(), AssertionError> {
    assert_select_equals_with_message(selector, content, count, html, "")
}

pub fn assert_select_equals_with_message(
    selector: &str,
    content: &str,
    count: impl Into<Count>,
    html: &str,
    message: &str,
) -> Result<(), AssertionError> {
    assert_select(selector, &Content::parse(content)?, count, html, message)
}

/// Assert the number of matches whose inner markup matches `pattern`
pub fn assert_select_regex(
    selector: &str,
    pattern: &str,
    count: impl Into<Count>,
    html: &str,
) -> Result<(), AssertionError> {
    assert_select_regex_with_message(selector, pattern, count, html, "")
}

pub fn assert_select_regex_with_message(
    selector: &str,
    pattern: &str,
    count: impl Into<Count>,
    html: &str,
    message: &str,
) -> Result<(), AssertionError> {
    let content = Content::Matches(compile_pattern(pattern)?);
    assert_select(selector, &content, count, html, message)
}
