//! cssxpath CSS Translator
//!
//! Converts CSS selectors into XPath 1.0 expressions.
//!
//! Translation is a fixed, ordered chain of pattern rewrites. Fragments that
//! later rules must not see (attribute brackets, `:contains()`, `:not()`, a few
//! pseudo-classes) are parked in a [`Substitutions`] table and swapped back in
//! by the last rule. Results are memoized per exact selector string.
//!
//! The translator is total: any input produces an expression. Unsupported
//! syntax passes through and usually yields XPath that matches nothing or does
//! not compile.
//!
//! # Example
//! ```
//! use cssxpath_css::css_to_xpath;
//!
//! assert_eq!(css_to_xpath("foo > bar"), "//foo/bar");
//! assert_eq!(css_to_xpath("foo, bar"), "//foo|//bar");
//! ```

mod attribute;
mod cache;
mod relational;
mod rules;
mod substitutions;
mod translator;

pub use attribute::{AttributeOperator, attribute_clause};
pub use cache::{CacheStats, TranslationCache};
pub use relational::expand_relational;
pub use rules::Rule;
pub use substitutions::Substitutions;
pub use translator::Translator;

/// Translate a CSS selector into XPath using the process-wide cached translator
pub fn css_to_xpath(selector: &str) -> String {
    Translator::global().translate(selector)
}
