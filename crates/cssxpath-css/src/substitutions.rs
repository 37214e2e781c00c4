//! Placeholder table for protected fragments
//!
//! A rule that emits a fragment later rules must not rewrite stores it here and
//! leaves `[{index}]` in the working string. The final rule resolves every
//! placeholder. One table spans a whole translation, including nested
//! `:not()` translations, so indices stay unique across the call tree.

/// Ordered table of protected XPath fragments for one translation
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    clauses: Vec<String>,
}

impl Substitutions {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fragment and return the placeholder token that refers to it
    pub fn protect(&mut self, clause: String) -> String {
        self.clauses.push(clause);
        placeholder(self.clauses.len() - 1)
    }

    /// Fragment stored at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.clauses.get(index).map(String::as_str)
    }

    /// Number of stored fragments
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Placeholder token for `index`
pub(crate) fn placeholder(index: usize) -> String {
    format!("[{{{index}}}]")
}
