//! Lexical scope tracking for name resolution.
//!
//! A bare name found inside a class body (say `Iterator` inside `QList`) is
//! relative to the lexical scope it was seen in. [`ScopeStack`] tracks that
//! scope during a header walk; [`DeclIndex`] is the set of fully-qualified
//! declarations built once per extraction run and passed by parameter, never
//! looked up through ambient global state.

use std::collections::HashSet;

/// Stack of scope names from root to the current position.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    segments: Vec<String>,
}

impl ScopeStack {
    /// Create a new root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope stack from existing segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Push a named scope onto the stack
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Pop the current scope from the stack
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// The current scope segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Build a fully qualified name for `name` inside the current scope
    pub fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.segments.join("::"), name)
        }
    }

    /// Iterate candidate scope prefixes from innermost to the global scope.
    ///
    /// For scope `["QList", "Private"]` this yields `"QList::Private"`,
    /// `"QList"`, and finally `""`.
    pub fn prefixes_outward(&self) -> impl Iterator<Item = String> + '_ {
        (0..=self.segments.len())
            .rev()
            .map(|n| self.segments[..n].join("::"))
    }
}

/// Set of known fully-qualified declaration names.
#[derive(Debug, Clone, Default)]
pub struct DeclIndex {
    names: HashSet<String>,
}

impl DeclIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fully-qualified declaration name
    pub fn insert(&mut self, qualified_name: impl Into<String>) {
        self.names.insert(qualified_name.into());
    }

    /// Whether a fully-qualified name is a known declaration
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for DeclIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scope_stack_qualify() {
        let mut scope = ScopeStack::new();
        assert_eq!(scope.qualify("f"), "f");

        scope.push("QList");
        assert_eq!(scope.qualify("Iterator"), "QList::Iterator");

        scope.push("Private");
        assert_eq!(scope.qualify("d"), "QList::Private::d");

        scope.pop();
        assert_eq!(scope.qualify("Iterator"), "QList::Iterator");
    }

    #[test]
    fn test_prefixes_outward() {
        let scope = ScopeStack::from_segments(vec!["QList".to_string(), "Private".to_string()]);
        let prefixes: Vec<String> = scope.prefixes_outward().collect();
        assert_eq!(prefixes, vec!["QList::Private", "QList", ""]);
    }

    #[test]
    fn test_decl_index() {
        let mut decls = DeclIndex::new();
        assert!(decls.is_empty());
        decls.insert("QList::Iterator");
        assert!(decls.contains("QList::Iterator"));
        assert!(!decls.contains("Iterator"));
        assert_eq!(decls.len(), 1);
    }
}
