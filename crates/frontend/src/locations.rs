//! Resolving raw front-end positions into [`SourceLocation`] values.

use crate::api::{FrontEnd, RawLocation};
use crate::handles::CursorHandle;
use cppmap_core::SourceLocation;
use std::path::PathBuf;

/// Expands a raw (possibly macro-nested) location to its expansion point.
///
/// A missing file (synthetic or invalid locations) yields an empty file name
/// rather than a failure.
pub fn resolve_location<F: FrontEnd>(frontend: &F, raw: RawLocation) -> SourceLocation {
    let expanded = frontend.expansion_location(raw);
    SourceLocation {
        file: expanded.file.unwrap_or_else(PathBuf::new),
        line: expanded.line,
        column: expanded.column,
        offset: expanded.offset,
    }
}

/// The expansion location of the start of a cursor's extent.
///
/// Used to stamp provenance on every entity derived from the cursor.
pub fn cursor_location<F: FrontEnd>(frontend: &F, cursor: CursorHandle) -> SourceLocation {
    let (start, _) = frontend.cursor_extent(cursor);
    resolve_location(frontend, start)
}

/// Start and end of a cursor's extent, for range diagnostics or excerpting.
pub fn cursor_range<F: FrontEnd>(
    frontend: &F,
    cursor: CursorHandle,
) -> (SourceLocation, SourceLocation) {
    let (start, end) = frontend.cursor_extent(cursor);
    (
        resolve_location(frontend, start),
        resolve_location(frontend, end),
    )
}
