//! Opaque front-end handles with value semantics.
//!
//! The compiler front end identifies AST nodes and semantic types through
//! fixed-size handles (a kind tag plus a few data words). The front end owns
//! whatever those words point at; this layer never dereferences them. Giving
//! the handles structural equality and stable hashing is what lets the
//! pipeline deduplicate repeated visits and key resolution caches by type
//! identity.

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use twox_hash::XxHash3_64;

/// Kind tag of a cursor handle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CursorKind {
    Invalid,
    TranslationUnit,
    Namespace,
    StructDecl,
    ClassDecl,
    EnumDecl,
    EnumConstantDecl,
    TypedefDecl,
    FunctionDecl,
    MethodDecl,
    FieldDecl,
    ParmDecl,
    TypeRef,
    TemplateRef,
    MacroExpansion,
}

/// Kind tag of a type handle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TypeKind {
    Invalid,
    Void,
    Bool,
    Char,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    Pointer,
    LValueReference,
    RValueReference,
    Record,
    Enum,
    Typedef,
    Elaborated,
    FunctionProto,
    ConstantArray,
    Unexposed,
}

impl TypeKind {
    /// Whether this kind is a builtin scalar type.
    ///
    /// Builtins have no declaration cursor, so elaborated-type resolution
    /// must leave them untouched.
    pub fn is_builtin(self) -> bool {
        matches!(
            self,
            TypeKind::Void
                | TypeKind::Bool
                | TypeKind::Char
                | TypeKind::UChar
                | TypeKind::Short
                | TypeKind::UShort
                | TypeKind::Int
                | TypeKind::UInt
                | TypeKind::Long
                | TypeKind::ULong
                | TypeKind::LongLong
                | TypeKind::ULongLong
                | TypeKind::Float
                | TypeKind::Double
        )
    }
}

/// Opaque identifier for a syntactic AST node inside one compilation.
///
/// Equality is purely structural: same kind, same data words. Handles are
/// only valid while the compiler session that produced them is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorHandle {
    pub kind: CursorKind,
    pub data: [u64; 3],
}

impl CursorHandle {
    pub const fn new(kind: CursorKind, data: [u64; 3]) -> Self {
        Self { kind, data }
    }

    pub const fn invalid() -> Self {
        Self::new(CursorKind::Invalid, [0; 3])
    }

    pub fn is_valid(&self) -> bool {
        self.kind != CursorKind::Invalid
    }

    /// Stable seeded hash over kind tag and data words.
    ///
    /// Equal handles hash equal under the same seed, across calls and runs.
    pub fn seeded_hash(&self, seed: u64) -> u64 {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&(self.kind as u64).to_le_bytes());
        for (i, word) in self.data.iter().enumerate() {
            bytes[8 + i * 8..16 + i * 8].copy_from_slice(&word.to_le_bytes());
        }
        XxHash3_64::oneshot_with_seed(seed, &bytes)
    }
}

/// Opaque identifier for a semantic type.
///
/// Same structural-equality and hashing contract as [`CursorHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeHandle {
    pub kind: TypeKind,
    pub data: [u64; 2],
}

impl TypeHandle {
    pub const fn new(kind: TypeKind, data: [u64; 2]) -> Self {
        Self { kind, data }
    }

    pub const fn invalid() -> Self {
        Self::new(TypeKind::Invalid, [0; 2])
    }

    pub fn is_valid(&self) -> bool {
        self.kind != TypeKind::Invalid
    }

    /// Stable seeded hash over kind tag and data words.
    pub fn seeded_hash(&self, seed: u64) -> u64 {
        let mut bytes = [0u8; 24];
        bytes[..8].copy_from_slice(&(self.kind as u64).to_le_bytes());
        for (i, word) in self.data.iter().enumerate() {
            bytes[8 + i * 8..16 + i * 8].copy_from_slice(&word.to_le_bytes());
        }
        XxHash3_64::oneshot_with_seed(seed, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_cursor_equality_is_structural() {
        let a = CursorHandle::new(CursorKind::ClassDecl, [1, 2, 3]);
        let b = CursorHandle::new(CursorKind::ClassDecl, [1, 2, 3]);
        let c = CursorHandle::new(CursorKind::ClassDecl, [1, 2, 4]);
        let d = CursorHandle::new(CursorKind::StructDecl, [1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_equal_handles_hash_equal() {
        let a = TypeHandle::new(TypeKind::Record, [7, 9]);
        let b = TypeHandle::new(TypeKind::Record, [7, 9]);
        assert_eq!(a, b);
        assert_eq!(a.seeded_hash(42), b.seeded_hash(42));

        let ca = CursorHandle::new(CursorKind::FunctionDecl, [5, 0, 1]);
        let cb = CursorHandle::new(CursorKind::FunctionDecl, [5, 0, 1]);
        assert_eq!(ca.seeded_hash(42), cb.seeded_hash(42));
    }

    #[test]
    fn test_seeded_hash_is_stable_across_calls() {
        let t = TypeHandle::new(TypeKind::Typedef, [11, 13]);
        assert_eq!(t.seeded_hash(0), t.seeded_hash(0));
        // Different seeds generally produce different values.
        assert_ne!(t.seeded_hash(0), t.seeded_hash(1));
    }

    #[test]
    fn test_kind_participates_in_hash_input() {
        let record = TypeHandle::new(TypeKind::Record, [1, 1]);
        let enum_ty = TypeHandle::new(TypeKind::Enum, [1, 1]);
        assert_ne!(record.seeded_hash(0), enum_ty.seeded_hash(0));
    }

    #[test]
    fn test_handles_usable_as_map_keys() {
        let mut seen = HashSet::new();
        seen.insert(TypeHandle::new(TypeKind::Record, [1, 2]));
        seen.insert(TypeHandle::new(TypeKind::Record, [1, 2]));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_is_builtin_range() {
        assert!(TypeKind::Void.is_builtin());
        assert!(TypeKind::Double.is_builtin());
        assert!(!TypeKind::Record.is_builtin());
        assert!(!TypeKind::Typedef.is_builtin());
        assert!(!TypeKind::Invalid.is_builtin());
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = TypeHandle::new(TypeKind::FunctionProto, [3, 4]);
        let json = serde_json::to_string(&t).unwrap();
        let back: TypeHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn test_invalid_handles() {
        assert!(!CursorHandle::invalid().is_valid());
        assert!(!TypeHandle::invalid().is_valid());
        assert!(TypeHandle::new(TypeKind::Int, [0, 0]).is_valid());
    }
}
