//! In-memory fake front end for driving the pipeline in tests.
#![allow(dead_code)]

use cppmap_frontend::{
    CursorHandle, CursorKind, ExpandedLocation, FrontEnd, RawDiagnostic, RawLocation,
    TranslationUnitHandle, TypeHandle, TypeKind,
};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
struct FakeType {
    spelling: String,
    declaration: Option<CursorHandle>,
    underlying: Option<TypeHandle>,
}

#[derive(Debug, Default, Clone)]
struct FakeCursor {
    declared_type: Option<TypeHandle>,
    extent: Option<(RawLocation, RawLocation)>,
}

/// Declaration-table-backed [`FrontEnd`] implementation.
#[derive(Debug, Default)]
pub struct FakeFrontEnd {
    types: HashMap<TypeHandle, FakeType>,
    cursors: HashMap<CursorHandle, FakeCursor>,
    locations: HashMap<RawLocation, ExpandedLocation>,
    diagnostics: HashMap<TranslationUnitHandle, Vec<RawDiagnostic>>,
    next_id: u64,
}

/// Route traces to the test writer, filtered by `RUST_LOG`.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl FakeFrontEnd {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Register a builtin type with the given spelling.
    pub fn add_builtin(&mut self, kind: TypeKind, spelling: &str) -> TypeHandle {
        let handle = TypeHandle::new(kind, [self.next_id(), 0]);
        self.types.insert(
            handle,
            FakeType {
                spelling: spelling.to_string(),
                ..FakeType::default()
            },
        );
        handle
    }

    /// Register a record type together with its declaration cursor.
    pub fn add_record(&mut self, spelling: &str) -> (TypeHandle, CursorHandle) {
        self.add_declared_type(TypeKind::Record, CursorKind::ClassDecl, spelling)
    }

    /// Register an enum type together with its declaration cursor.
    pub fn add_enum(&mut self, spelling: &str) -> (TypeHandle, CursorHandle) {
        self.add_declared_type(TypeKind::Enum, CursorKind::EnumDecl, spelling)
    }

    fn add_declared_type(
        &mut self,
        type_kind: TypeKind,
        cursor_kind: CursorKind,
        spelling: &str,
    ) -> (TypeHandle, CursorHandle) {
        let ty = TypeHandle::new(type_kind, [self.next_id(), 0]);
        let cursor = CursorHandle::new(cursor_kind, [self.next_id(), 0, 0]);
        self.types.insert(
            ty,
            FakeType {
                spelling: spelling.to_string(),
                declaration: Some(cursor),
                ..FakeType::default()
            },
        );
        self.cursors.insert(
            cursor,
            FakeCursor {
                declared_type: Some(ty),
                ..FakeCursor::default()
            },
        );
        (ty, cursor)
    }

    /// Register an elaborated wrapper (e.g. `struct Foo`) around a declared
    /// type.
    pub fn add_elaborated(&mut self, spelling: &str, target: TypeHandle) -> TypeHandle {
        let declaration = self.types.get(&target).and_then(|t| t.declaration);
        let handle = TypeHandle::new(TypeKind::Elaborated, [self.next_id(), 0]);
        self.types.insert(
            handle,
            FakeType {
                spelling: spelling.to_string(),
                declaration,
                ..FakeType::default()
            },
        );
        handle
    }

    /// Register a typedef with the given underlying type and a declaration
    /// cursor, so elaborated wrappers around the typedef resolve to it.
    pub fn add_typedef(&mut self, spelling: &str, underlying: TypeHandle) -> TypeHandle {
        let handle = TypeHandle::new(TypeKind::Typedef, [self.next_id(), 0]);
        let cursor = CursorHandle::new(CursorKind::TypedefDecl, [self.next_id(), 0, 0]);
        self.types.insert(
            handle,
            FakeType {
                spelling: spelling.to_string(),
                declaration: Some(cursor),
                underlying: Some(underlying),
            },
        );
        self.cursors.insert(
            cursor,
            FakeCursor {
                declared_type: Some(handle),
                ..FakeCursor::default()
            },
        );
        handle
    }

    /// Rewire an existing typedef's underlying type (for cycle tests).
    pub fn set_underlying(&mut self, typedef: TypeHandle, underlying: TypeHandle) {
        if let Some(ty) = self.types.get_mut(&typedef) {
            ty.underlying = Some(underlying);
        }
    }

    /// Mint a raw location that expands to the given position.
    pub fn add_location(&mut self, file: Option<&str>, line: u32, column: u32, offset: u32) -> RawLocation {
        let raw = RawLocation::new([self.next_id(), 0]);
        self.locations.insert(
            raw,
            ExpandedLocation {
                file: file.map(PathBuf::from),
                line,
                column,
                offset,
            },
        );
        raw
    }

    /// Register a standalone cursor with an extent.
    pub fn add_cursor(
        &mut self,
        kind: CursorKind,
        extent: (RawLocation, RawLocation),
    ) -> CursorHandle {
        let cursor = CursorHandle::new(kind, [self.next_id(), 0, 0]);
        self.cursors.insert(
            cursor,
            FakeCursor {
                extent: Some(extent),
                ..FakeCursor::default()
            },
        );
        cursor
    }

    /// Attach a diagnostic to a translation unit.
    pub fn add_diagnostic(&mut self, unit: TranslationUnitHandle, diagnostic: RawDiagnostic) {
        self.diagnostics.entry(unit).or_default().push(diagnostic);
    }
}

impl FrontEnd for FakeFrontEnd {
    fn type_of_cursor(&self, cursor: CursorHandle) -> TypeHandle {
        self.cursors
            .get(&cursor)
            .and_then(|c| c.declared_type)
            .unwrap_or_else(TypeHandle::invalid)
    }

    fn declaration_of(&self, ty: TypeHandle) -> CursorHandle {
        self.types
            .get(&ty)
            .and_then(|t| t.declaration)
            .unwrap_or_else(CursorHandle::invalid)
    }

    fn type_of_declaration(&self, cursor: CursorHandle) -> TypeHandle {
        self.cursors
            .get(&cursor)
            .and_then(|c| c.declared_type)
            .unwrap_or_else(TypeHandle::invalid)
    }

    fn underlying_type(&self, ty: TypeHandle) -> TypeHandle {
        self.types
            .get(&ty)
            .and_then(|t| t.underlying)
            .unwrap_or_else(TypeHandle::invalid)
    }

    fn type_spelling(&self, ty: TypeHandle) -> String {
        self.types
            .get(&ty)
            .map(|t| t.spelling.clone())
            .unwrap_or_default()
    }

    fn cursor_extent(&self, cursor: CursorHandle) -> (RawLocation, RawLocation) {
        self.cursors
            .get(&cursor)
            .and_then(|c| c.extent)
            .unwrap_or((RawLocation::new([0, 0]), RawLocation::new([0, 0])))
    }

    fn expansion_location(&self, raw: RawLocation) -> ExpandedLocation {
        self.locations.get(&raw).cloned().unwrap_or_default()
    }

    fn translation_unit_diagnostics(&self, unit: TranslationUnitHandle) -> Vec<RawDiagnostic> {
        self.diagnostics.get(&unit).cloned().unwrap_or_default()
    }
}
