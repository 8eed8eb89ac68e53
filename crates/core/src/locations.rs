//! Source location value type.
//!
//! Locations are copied out of front-end handles at the moment they are
//! observed; nothing here refers back to the compiler session.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::PathBuf;

/// A resolved source position, expanded to its macro expansion point.
///
/// An empty `file` is legal and stands for a synthetic or invalid location
/// (observed for compiler-generated entities).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32, offset: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset,
        }
    }

    /// Whether this location points into a real file.
    pub fn has_file(&self) -> bool {
        !self.file.as_os_str().is_empty()
    }
}

impl Display for SourceLocation {
    /// Renders as `path:line`, with `:column` appended when the column is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)?;
        if self.column > 0 {
            write!(f, ":{}", self.column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_with_column() {
        let loc = SourceLocation::new("include/foo.h", 42, 7, 1024);
        assert_eq!(loc.to_string(), "include/foo.h:42:7");
    }

    #[test]
    fn test_display_omits_zero_column() {
        let loc = SourceLocation::new("include/foo.h", 42, 0, 1024);
        assert_eq!(loc.to_string(), "include/foo.h:42");
    }

    #[test]
    fn test_empty_file_is_tolerated() {
        let loc = SourceLocation::default();
        assert!(!loc.has_file());
        assert_eq!(loc.to_string(), ":0");
    }

    #[test]
    fn test_serde_roundtrip() {
        let loc = SourceLocation::new("a.h", 10, 3, 99);
        let json = serde_json::to_string(&loc).unwrap();
        let back: SourceLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
