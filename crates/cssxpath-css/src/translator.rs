//! Selector translator
//!
//! Runs the rule pipeline over a selector and memoizes the result.

use std::sync::OnceLock;

use crate::cache::{CacheStats, TranslationCache};
use crate::rules::{Rule, default_rules};
use crate::substitutions::Substitutions;

/// CSS selector to XPath translator
///
/// Holds the compiled rule pipeline and an optional cache. A translator is
/// `Sync`; all per-translation state lives in a [`Substitutions`] table owned
/// by the outermost call.
#[derive(Debug)]
pub struct Translator {
    rules: Vec<Rule>,
    cache: Option<TranslationCache>,
}

impl Translator {
    /// Create a translator with its own cache
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            cache: Some(TranslationCache::new()),
        }
    }

    /// Create a translator that recomputes every selector
    pub fn uncached() -> Self {
        Self {
            rules: default_rules(),
            cache: None,
        }
    }

    /// Process-wide translator shared by [`crate::css_to_xpath`]
    pub fn global() -> &'static Translator {
        static GLOBAL: OnceLock<Translator> = OnceLock::new();
        GLOBAL.get_or_init(Translator::new)
    }

    /// Translate a CSS selector into an XPath expression
    pub fn translate(&self, selector: &str) -> String {
        let mut substitutions = Substitutions::new();
        self.translate_with(selector, &mut substitutions)
    }

    /// Translate using a caller-owned placeholder table
    ///
    /// Nested translations (the body of `:not()`) go through here with the
    /// parent's table, so placeholders from both levels share one index space.
    pub fn translate_with(&self, selector: &str, substitutions: &mut Substitutions) -> String {
        if let Some(xpath) = self.cache.as_ref().and_then(|cache| cache.get(selector)) {
            tracing::trace!(selector, %xpath, "selector cache hit");
            return xpath;
        }

        // The leading space becomes the initial `//` and marks the first
        // compound selector as preceded by whitespace
        let mut xpath = format!(" {selector}");
        for rule in &self.rules {
            xpath = rule.apply(self, &xpath, substitutions);
        }
        let xpath = finish(xpath);

        tracing::debug!(selector, %xpath, "translated selector");
        if let Some(cache) = &self.cache {
            cache.insert(selector, &xpath);
        }
        xpath
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Cache statistics, if this translator caches
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(TranslationCache::stats)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor at the document and drop `////` runs left by stacked axis steps
fn finish(xpath: String) -> String {
    let xpath = if xpath.starts_with("//") {
        xpath
    } else {
        format!("//{xpath}")
    };
    xpath.replace("////", "")
}
