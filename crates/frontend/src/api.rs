//! The compiler front-end surface consumed by this layer.
//!
//! Session and translation-unit management live outside this crate; what
//! arrives here is an implementation of [`FrontEnd`] plus handles minted by
//! it. Keeping the surface a trait lets the test suite drive the whole
//! pipeline from an in-memory fake.

use crate::handles::{CursorHandle, TypeHandle};
use std::path::PathBuf;

/// Raw, unexpanded source position token minted by the front end.
///
/// Meaningless outside the session that produced it; expand through
/// [`FrontEnd::expansion_location`] before keeping it anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawLocation {
    pub data: [u64; 2],
}

impl RawLocation {
    pub const fn new(data: [u64; 2]) -> Self {
        Self { data }
    }
}

/// A raw location expanded to its macro expansion point.
///
/// `file` is `None` for synthetic or invalid locations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedLocation {
    pub file: Option<PathBuf>,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

/// Handle to a compiled translation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationUnitHandle {
    pub data: u64,
}

impl TranslationUnitHandle {
    pub const fn new(data: u64) -> Self {
        Self { data }
    }
}

/// A diagnostic as reported by the front end, before normalization.
///
/// Children may nest arbitrarily deep on the front-end side; collection
/// flattens them one level into formatted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    /// Front-end severity integer (0 = ignored .. 4 = fatal)
    pub severity: i32,
    pub message: String,
    pub location: RawLocation,
    pub children: Vec<RawDiagnostic>,
}

/// The black-box compiler front end.
///
/// Implementations interpret the opaque handles; this layer only composes
/// the calls and copies results out into value types. All methods are
/// infallible by contract: the front end signals "nothing there" through
/// invalid handles or absent files, never through errors.
pub trait FrontEnd {
    /// Declared type of a cursor
    fn type_of_cursor(&self, cursor: CursorHandle) -> TypeHandle;

    /// Declaration cursor of a type (invalid for builtins)
    fn declaration_of(&self, ty: TypeHandle) -> CursorHandle;

    /// The type declared by a declaration cursor
    fn type_of_declaration(&self, cursor: CursorHandle) -> TypeHandle;

    /// Underlying type of a typedef (invalid if `ty` is not a typedef)
    fn underlying_type(&self, ty: TypeHandle) -> TypeHandle;

    /// Canonical source-like spelling of a type
    fn type_spelling(&self, ty: TypeHandle) -> String;

    /// Start and end of a cursor's source extent
    fn cursor_extent(&self, cursor: CursorHandle) -> (RawLocation, RawLocation);

    /// Expand a raw location to its macro expansion point
    fn expansion_location(&self, raw: RawLocation) -> ExpandedLocation;

    /// All diagnostics attached to a translation unit, in emission order
    fn translation_unit_diagnostics(&self, unit: TranslationUnitHandle) -> Vec<RawDiagnostic>;
}
