//! Diagnostic records collected from a compiled translation unit.
//!
//! Each raw front-end diagnostic is converted once, at parse time, into the
//! immutable [`Diagnostic`] record; child diagnostics are flattened one level
//! into pre-formatted strings. The records are never mutated after
//! collection.

use crate::locations::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum_macros::{Display as StrumDisplay, EnumString};

/// Diagnostic severity rank: `Ignored < Note < Warning < Error < Fatal`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Ignored,
    Note,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Maps the front end's severity integer onto the rank, clamping unknown
    /// values to `Ignored`.
    pub fn from_front_end(raw: i32) -> Self {
        match raw {
            1 => Severity::Note,
            2 => Severity::Warning,
            3 => Severity::Error,
            4 => Severity::Fatal,
            _ => Severity::Ignored,
        }
    }
}

/// Where a diagnostic came from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiagnosticOrigin {
    /// Reported by the compiler front end about the input source
    FrontEnd,
    /// Synthesized by this tool itself
    Tool,
}

/// An immutable diagnostic record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub location: SourceLocation,
    pub severity: Severity,
    pub origin: DiagnosticOrigin,
    /// Child diagnostics flattened to `severity: message` strings
    pub children: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic reported by the compiler front end
    pub fn front_end(
        message: impl Into<String>,
        location: SourceLocation,
        severity: Severity,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            severity,
            origin: DiagnosticOrigin::FrontEnd,
            children: Vec::new(),
        }
    }

    /// A diagnostic synthesized by this tool
    pub fn tool(message: impl Into<String>, location: SourceLocation, severity: Severity) -> Self {
        Self {
            message: message.into(),
            location,
            severity,
            origin: DiagnosticOrigin::Tool,
            children: Vec::new(),
        }
    }

    /// Attaches pre-formatted child messages
    #[must_use]
    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }
}

impl Display for Diagnostic {
    /// Renders as `file:line:column: severity: message`, suffixed with
    /// ` [other]` for tool-synthesized diagnostics, followed by indented
    /// child lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.message
        )?;
        if self.origin == DiagnosticOrigin::Tool {
            write!(f, " [other]")?;
        }
        for child in &self.children {
            write!(f, "\n  {child}")?;
        }
        Ok(())
    }
}

/// Returns the highest severity present in `diagnostics`, `Ignored` when the
/// sequence is empty.
pub fn max_severity(diagnostics: &[Diagnostic]) -> Severity {
    diagnostics
        .iter()
        .map(|d| d.severity)
        .max()
        .unwrap_or(Severity::Ignored)
}
