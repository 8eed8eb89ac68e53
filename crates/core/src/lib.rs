//! Core value types for the cppmap extraction pipeline
//!
//! This crate provides the foundational abstractions used throughout the
//! cppmap system, including:
//!
//! - **Locations**: resolved source positions with provenance rendering
//! - **Diagnostics**: immutable, severity-ranked compiler diagnostic records
//! - **TypeInfo**: the structured, comparable, hashable C++ type model
//! - **Template splitting**: bracket-depth-aware argument-list scanning
//! - **Scope & policy tables**: lexical scope tracking and standard-type
//!   alias canonicalization, passed by parameter rather than ambient state
//! - **Error handling**: unified error types
//!
//! Everything here is a value type: no back-references, no front-end
//! handles, no lifetime ties to a compiler session.

pub mod diagnostics;
pub mod error;
pub mod locations;
pub mod scope;
pub mod std_types;
pub mod template;
pub mod type_info;

// Re-export main types for convenience
pub use diagnostics::{max_severity, Diagnostic, DiagnosticOrigin, Severity};
pub use error::{Error, Result, ResultExt};
pub use locations::SourceLocation;
pub use scope::{DeclIndex, ScopeStack};
pub use std_types::StdTypeTable;
pub use template::{split_template_args, top_level_args, TemplateSplit};
pub use type_info::{Indirection, ReferenceKind, TypeInfo, TypeInfoBuilder};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagnostics::{max_severity, Diagnostic, Severity};
    pub use crate::error::{Result, ResultExt};
    pub use crate::locations::SourceLocation;
    pub use crate::type_info::TypeInfo;
}
