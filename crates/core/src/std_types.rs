//! Standard-type alias canonicalization policy.
//!
//! The exact alias table is configuration, not pipeline logic: callers build
//! one per extraction run and pass it wherever simplification is wanted. The
//! default table covers the spelling variants the common container and
//! smart-pointer types show up under in practice.

use im::HashMap as ImHashMap;

/// Alias-to-canonical mapping for standard-library and framework types.
///
/// Cheap to clone; share one per extraction run.
#[derive(Debug, Clone, Default)]
pub struct StdTypeTable {
    aliases: ImHashMap<String, String>,
}

impl StdTypeTable {
    /// An empty table (simplification becomes a no-op)
    pub fn new() -> Self {
        Self::default()
    }

    /// Default aliases for the C++ standard library and Qt containers
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (alias, canonical) in [
            // libstdc++/libc++ internal spellings
            ("std::__cxx11::basic_string", "std::string"),
            ("std::__1::basic_string", "std::string"),
            ("std::basic_string", "std::string"),
            ("std::__cxx11::string", "std::string"),
            ("std::__1::vector", "std::vector"),
            ("std::__1::map", "std::map"),
            ("std::__1::shared_ptr", "std::shared_ptr"),
            ("std::__1::unique_ptr", "std::unique_ptr"),
            // Qt spelling variants
            ("QStringList", "QList<QString>"),
            ("QVector", "QList"),
        ] {
            table.insert(alias, canonical);
        }
        table
    }

    /// Add or replace an alias
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(alias.into(), canonical.into());
    }

    /// Builder-style extension
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.insert(alias, canonical);
        self
    }

    /// Canonical spelling for `name`, if it is a known alias
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
