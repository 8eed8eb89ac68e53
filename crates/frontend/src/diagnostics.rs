//! Collecting front-end diagnostics into normalized records.

use crate::api::{FrontEnd, RawDiagnostic, TranslationUnitHandle};
use crate::locations::resolve_location;
use cppmap_core::{Diagnostic, Severity};

/// Enumerates all diagnostics attached to a compiled unit, in front-end
/// emission order, converting each into the immutable core record.
///
/// Child diagnostics are flattened one level into `severity: message`
/// strings; grandchildren are dropped, matching the front end's default
/// display formatting. Diagnostics are data, never control flow: extraction
/// continues regardless of severity, and the caller decides whether to halt
/// via [`cppmap_core::max_severity`].
pub fn collect_diagnostics<F: FrontEnd>(
    frontend: &F,
    unit: TranslationUnitHandle,
) -> Vec<Diagnostic> {
    let raw = frontend.translation_unit_diagnostics(unit);
    tracing::debug!(count = raw.len(), "collected translation unit diagnostics");
    raw.into_iter()
        .map(|diag| convert(frontend, diag))
        .collect()
}

fn convert<F: FrontEnd>(frontend: &F, raw: RawDiagnostic) -> Diagnostic {
    let severity = Severity::from_front_end(raw.severity);
    let location = resolve_location(frontend, raw.location);
    let children = raw
        .children
        .iter()
        .map(|child| {
            format!(
                "{}: {}",
                Severity::from_front_end(child.severity),
                child.message
            )
        })
        .collect();
    Diagnostic::front_end(raw.message, location, severity).with_children(children)
}
