//! Type normalization against the front end.
//!
//! Two independent passes, composed: stripping elaborated-type wrapping
//! (`struct Foo`, `enum Bar`, dependent-name forms) and collapsing typedef
//! indirection. Both are soft: a type that does not resolve is returned
//! unchanged, never an error. The composed result is what gets spelled and
//! handed to the text-based [`TypeInfo`] construction.

use crate::api::FrontEnd;
use crate::handles::{TypeHandle, TypeKind};
use cppmap_core::{Result, TypeInfo};
use std::collections::HashMap;

/// Upper bound on typedef-chain hops.
///
/// The front end is trusted not to produce cyclic typedef graphs; the cap is
/// a guard against a faulty front end, not a semantic limit.
const MAX_TYPEDEF_HOPS: usize = 64;

/// Resolves type handles to their canonical declared form and builds cached
/// [`TypeInfo`] values from their spellings.
///
/// The cache is keyed by resolved handle and is not thread-safe; callers
/// processing headers in parallel shard one resolver per worker.
pub struct TypeResolver<'f, F: FrontEnd> {
    frontend: &'f F,
    cache: HashMap<TypeHandle, TypeInfo>,
}

impl<'f, F: FrontEnd> TypeResolver<'f, F> {
    pub fn new(frontend: &'f F) -> Self {
        Self {
            frontend,
            cache: HashMap::new(),
        }
    }

    /// Collapses elaborated forms down to the bare declared type.
    ///
    /// Builtins resolve to themselves; so does any type whose declaration
    /// does not change the kind. Idempotent.
    pub fn resolve_elaborated_type(&self, ty: TypeHandle) -> TypeHandle {
        if ty.kind.is_builtin() {
            return ty;
        }
        let decl = self.frontend.declaration_of(ty);
        if !decl.is_valid() {
            return ty;
        }
        let declared = self.frontend.type_of_declaration(decl);
        if declared.is_valid() && declared.kind != ty.kind {
            declared
        } else {
            ty
        }
    }

    /// Follows typedef indirection until the underlying type is invalid or
    /// no longer a typedef.
    pub fn resolve_typedef_chain(&self, ty: TypeHandle) -> TypeHandle {
        let mut current = ty;
        let mut hops = 0;
        while current.kind == TypeKind::Typedef {
            let underlying = self.frontend.underlying_type(current);
            if !underlying.is_valid() {
                break;
            }
            current = underlying;
            hops += 1;
            if hops >= MAX_TYPEDEF_HOPS {
                tracing::warn!(
                    spelling = %self.frontend.type_spelling(ty),
                    hops,
                    "typedef chain exceeded hop limit, stopping at last type reached"
                );
                break;
            }
        }
        current
    }

    /// The composed normalization: elaboration stripped, typedefs collapsed,
    /// repeated until the handle stops changing. A typedef whose underlying
    /// type is itself elaborated needs another elaboration pass, so a single
    /// composition is not enough. Idempotent; this is the form to use
    /// whenever a nominal, canonical type is required.
    pub fn fully_resolve(&self, ty: TypeHandle) -> TypeHandle {
        let mut current = ty;
        for _ in 0..MAX_TYPEDEF_HOPS {
            let next = self.resolve_typedef_chain(self.resolve_elaborated_type(current));
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Canonical source-like spelling of a type
    pub fn type_spelling(&self, ty: TypeHandle) -> String {
        self.frontend.type_spelling(ty)
    }

    /// Whether a type's spelling carries explicit scope resolution, i.e.
    /// starts with `::` or contains `" ::"`.
    pub fn has_scope_resolution(&self, ty: TypeHandle) -> bool {
        let spelling = self.frontend.type_spelling(ty);
        spelling.starts_with("::") || spelling.contains(" ::")
    }

    /// Fully resolves `ty`, spells it, and parses the spelling into a
    /// [`TypeInfo`], caching the result by resolved handle.
    pub fn type_info(&mut self, ty: TypeHandle) -> Result<TypeInfo> {
        let resolved = self.fully_resolve(ty);
        if let Some(hit) = self.cache.get(&resolved) {
            tracing::debug!(spelling = %self.frontend.type_spelling(resolved), "type cache hit");
            return Ok(hit.clone());
        }
        let info = TypeInfo::parse(&self.frontend.type_spelling(resolved))?;
        self.cache.insert(resolved, info.clone());
        Ok(info)
    }

    /// Number of distinct resolved types seen so far
    pub fn cached_types(&self) -> usize {
        self.cache.len()
    }
}
