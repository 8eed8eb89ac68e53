//! Bracket-depth-aware splitting of template argument lists.
//!
//! The front end hands us type spellings as flat text, so template
//! specializations like `QMap<QString, QList<int>>` have to be taken apart
//! with a character-by-character scan that tracks angle-bracket nesting.
//! The scan emits each argument exactly once, at its own nesting level;
//! callers that need deeper structure re-invoke the splitter on any level-2+
//! span.

/// Outcome of a template-argument scan.
///
/// "Not a template" and "truncated template" are distinct recoverable
/// outcomes, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSplit {
    /// No `<` at or after the start offset.
    NotTemplate,
    /// The spelling ended before the argument list closed.
    Unterminated,
    /// A complete argument list was found.
    Args {
        /// Byte offset of the opening `<`.
        open: usize,
        /// Exclusive end offset: one past the closing `>`, advanced past any
        /// immediately following whitespace and commas so the caller can
        /// resume scanning after a nested `>,` sequence.
        close: usize,
    },
}

/// Scans `spelling` for a template argument list starting at or after
/// `start`, invoking `handler` with `(level, argument_text)` for every
/// argument found.
///
/// Levels start at 1 for the outermost list. Arguments containing nested
/// `<...>` are emitted as a single trimmed span at their own level, after
/// their nested arguments have been emitted. Empty argument texts are not
/// emitted.
pub fn split_template_args<F>(spelling: &str, start: usize, mut handler: F) -> TemplateSplit
where
    F: FnMut(usize, &str),
{
    let bytes = spelling.as_bytes();
    let open = match bytes[start.min(bytes.len())..]
        .iter()
        .position(|&b| b == b'<')
    {
        Some(pos) => start + pos,
        None => return TemplateSplit::NotTemplate,
    };

    let mut emit = |level: usize, text: &str| {
        let text = text.trim();
        if !text.is_empty() {
            handler(level, text);
        }
    };

    // One split point per active nesting level; the stack length is the level.
    let mut split_points = vec![open + 1];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                split_points.push(i + 1);
                i += 1;
            }
            b',' => {
                let level = split_points.len();
                if let Some(point) = split_points.last_mut() {
                    emit(level, &spelling[*point..i]);
                    *point = i + 1;
                }
                i += 1;
            }
            b'>' => {
                let level = split_points.len();
                if let Some(point) = split_points.pop() {
                    emit(level, &spelling[point..i]);
                }
                i += 1;
                if split_points.is_empty() {
                    // List closed; skip trailing whitespace/commas so the
                    // caller resumes cleanly.
                    while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
                        i += 1;
                    }
                    return TemplateSplit::Args { open, close: i };
                }
            }
            _ => i += 1,
        }
    }

    TemplateSplit::Unterminated
}

/// Convenience wrapper collecting only the outermost (level-1) argument
/// texts, which is what recursive type construction needs.
pub fn top_level_args(spelling: &str, start: usize) -> (TemplateSplit, Vec<String>) {
    let mut args = Vec::new();
    let outcome = split_template_args(spelling, start, |level, text| {
        if level == 1 {
            args.push(text.to_string());
        }
    });
    (outcome, args)
}
