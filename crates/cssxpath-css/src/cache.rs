//! Translation cache
//!
//! Selector-to-XPath memoization. Entries are keyed by the exact selector
//! text, never evicted and never overwritten.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Append-only selector cache, safe to share between threads
#[derive(Debug, Default)]
pub struct TranslationCache {
    /// Selector text -> final XPath
    entries: RwLock<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached XPath for `selector`, counting the lookup as a hit or miss
    pub fn get(&self, selector: &str) -> Option<String> {
        // Writers only ever insert identical values, so a poisoned map is still consistent
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let found = entries.get(selector).cloned();
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a translation; the first value stored for a selector wins
    pub fn insert(&self, selector: &str, xpath: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(selector.to_owned())
            .or_insert_with(|| xpath.to_owned());
    }

    /// Number of cached selectors
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stats
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_cache() {
        let cache = TranslationCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get("div.foo"), None);

        cache.insert("div.foo", "//div[1]");
        assert_eq!(cache.get("div.foo").as_deref(), Some("//div[1]"));

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_entries_are_not_overwritten() {
        let cache = TranslationCache::new();
        cache.insert("a", "//a");
        cache.insert("a", "//b");
        assert_eq!(cache.get("a").as_deref(), Some("//a"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_exact() {
        let cache = TranslationCache::new();
        cache.insert("a b", "//a//b");
        assert_eq!(cache.get("a  b"), None);
        assert_eq!(cache.get(" a b"), None);
    }
}
