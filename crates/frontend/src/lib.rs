//! Front-end-facing layer of the cppmap extraction pipeline
//!
//! This crate turns the opaque cursor and type handles exposed by a C++
//! compiler front end into the value types of `cppmap-core`:
//!
//! - **Handles**: structural equality and stable seeded hashing for opaque
//!   cursor/type identifiers
//! - **Locations**: expansion of raw positions into `SourceLocation` values
//! - **Diagnostics**: collection and normalization of per-unit diagnostics
//! - **Resolver**: elaborated-type and typedef-chain normalization plus a
//!   handle-keyed `TypeInfo` cache
//!
//! The front end itself (session management, include paths, cursor
//! iteration) is a collaborator behind the [`FrontEnd`] trait; this crate
//! holds no handle longer than the call that received it and copies
//! everything out into values before returning.

pub mod api;
pub mod diagnostics;
pub mod handles;
pub mod locations;
pub mod resolver;

pub use api::{ExpandedLocation, FrontEnd, RawDiagnostic, RawLocation, TranslationUnitHandle};
pub use diagnostics::collect_diagnostics;
pub use handles::{CursorHandle, CursorKind, TypeHandle, TypeKind};
pub use locations::{cursor_location, cursor_range, resolve_location};
pub use resolver::TypeResolver;
