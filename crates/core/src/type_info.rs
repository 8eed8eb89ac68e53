//! Structured representation of a resolved C++ type.
//!
//! [`TypeInfo`] is the canonical value the rest of the system attaches to
//! classes, functions, and fields: qualified name, cv qualifiers, reference
//! kind, pointer indirections, array dimensions, function-pointer shape, and
//! recursively nested instantiation arguments. It is built incrementally
//! while a spelling is parsed (or through [`TypeInfoBuilder`]) and treated as
//! immutable afterwards; consumers copy it by value, never share it by
//! reference.
//!
//! Parsing is deliberately text-based: the front end only exposes spellings
//! and coarse handles, and has already validated the input's syntax, so a
//! bracket-depth scan over the spelling is adequate.

use crate::error::{Error, Result};
use crate::scope::{DeclIndex, ScopeStack};
use crate::std_types::StdTypeTable;
use crate::template::{top_level_args, TemplateSplit};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum_macros::{Display as StrumDisplay, EnumString};

/// Reference kind of a type
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReferenceKind {
    #[default]
    None,
    LValue,
    RValue,
}

/// One pointer indirection, with the qualifiers that follow its `*`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Indirection {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl Indirection {
    pub const fn plain() -> Self {
        Self {
            is_const: false,
            is_volatile: false,
        }
    }

    pub const fn new(is_const: bool, is_volatile: bool) -> Self {
        Self {
            is_const,
            is_volatile,
        }
    }
}

/// Structured type value
///
/// Equality and hashing are structural over all fields. Use
/// [`TypeInfo::builder`] for incremental programmatic construction and
/// [`TypeInfo::parse`] to build one from a spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct TypeInfo {
    /// Scope segments, outermost to innermost
    #[builder(setter(each(name = "name_segment", into)))]
    pub qualified_name: Vec<String>,

    pub is_const: bool,
    pub is_volatile: bool,

    pub reference: ReferenceKind,

    /// Pointer indirections, outermost first
    #[builder(setter(each(name = "indirection")))]
    pub indirections: Vec<Indirection>,

    /// Array dimension expressions, outermost first
    #[builder(setter(each(name = "array_dim", into)))]
    pub array_dims: Vec<String>,

    pub is_function_pointer: bool,

    /// Argument types, for function-pointer types
    #[builder(setter(each(name = "argument")))]
    pub arguments: Vec<TypeInfo>,

    /// Instantiation arguments, for template specializations
    #[builder(setter(each(name = "instantiation")))]
    pub instantiations: Vec<TypeInfo>,
}

impl TypeInfo {
    /// Create a builder for incremental construction
    pub fn builder() -> TypeInfoBuilder {
        TypeInfoBuilder::default()
    }

    /// Create a plain named type
    pub fn named(qualified_name: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            qualified_name: qualified_name.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a type spelling into a structured value.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty spelling, an unterminated template
    /// argument list, or malformed function-pointer/array syntax. Everything
    /// else is accepted best-effort; the front end has already validated the
    /// input.
    pub fn parse(spelling: &str) -> Result<Self> {
        let s = spelling.trim();
        if s.is_empty() {
            return Err(Error::invalid_input("type spelling cannot be empty"));
        }

        // Function pointers first: `ret (*)(args)`.
        if let Some(pos) = s.find("(*)") {
            return Self::parse_function_pointer(spelling, &s[..pos], s[pos + 3..].trim_start());
        }

        let (core, array_dims) = strip_array_dims(spelling, s)?;

        // Trailing indirections and reference, scanned right to left. A
        // qualifier token binds to the `*` on its left; qualifiers left over
        // at the end of the scan belong to the base type (`int const`).
        let mut indirections = Vec::new();
        let mut reference = ReferenceKind::None;
        let mut pending_const = false;
        let mut pending_volatile = false;
        let mut t = core.trim_end();
        loop {
            if let Some(rest) = t.strip_suffix("&&") {
                if reference == ReferenceKind::None && indirections.is_empty() {
                    reference = ReferenceKind::RValue;
                    t = rest.trim_end();
                    continue;
                }
            }
            if let Some(rest) = t.strip_suffix('&') {
                if reference == ReferenceKind::None && indirections.is_empty() {
                    reference = ReferenceKind::LValue;
                    t = rest.trim_end();
                    continue;
                }
            }
            if let Some(rest) = t.strip_suffix('*') {
                indirections.push(Indirection::new(pending_const, pending_volatile));
                pending_const = false;
                pending_volatile = false;
                t = rest.trim_end();
                continue;
            }
            if let Some(rest) = t.strip_suffix("const") {
                if token_boundary(rest) {
                    pending_const = true;
                    t = rest.trim_end();
                    continue;
                }
            }
            if let Some(rest) = t.strip_suffix("volatile") {
                if token_boundary(rest) {
                    pending_volatile = true;
                    t = rest.trim_end();
                    continue;
                }
            }
            break;
        }

        let mut info = TypeInfo {
            is_const: pending_const,
            is_volatile: pending_volatile,
            reference,
            indirections,
            array_dims,
            ..Self::default()
        };

        // Leading cv qualifiers on the whole spelling.
        let (t, leading_const, leading_volatile) = strip_leading_cv(t);
        info.is_const |= leading_const;
        info.is_volatile |= leading_volatile;

        // Qualified name runs up to the first unqualified `<`; level-1
        // argument texts become nested TypeInfo values.
        let (name_text, remainder) = match top_level_args(t, 0) {
            (TemplateSplit::NotTemplate, _) => (t, ""),
            (TemplateSplit::Unterminated, _) => {
                return Err(Error::parse(spelling, "unterminated template argument list"));
            }
            (TemplateSplit::Args { open, close }, args) => {
                for arg in &args {
                    info.instantiations.push(Self::parse(arg)?);
                }
                (t[..open].trim_end(), t[close.min(t.len())..].trim())
            }
        };

        for segment in name_text
            .split("::")
            .chain(remainder.split("::"))
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
        {
            let (seg, seg_const, seg_volatile) = strip_leading_cv(segment);
            info.is_const |= seg_const;
            info.is_volatile |= seg_volatile;
            if !seg.is_empty() {
                info.qualified_name.push(seg.to_string());
            }
        }

        Ok(info)
    }

    fn parse_function_pointer(spelling: &str, ret: &str, args_part: &str) -> Result<Self> {
        let inner = args_part
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::parse(spelling, "malformed function pointer arguments"))?;

        let mut info = if ret.trim().is_empty() {
            Self::default()
        } else {
            Self::parse(ret)?
        };
        info.is_function_pointer = true;
        for arg in split_top_level(inner) {
            let arg = arg.trim();
            if !arg.is_empty() && arg != "void" {
                info.arguments.push(Self::parse(arg)?);
            }
        }
        Ok(info)
    }

    /// A type is plain when it carries nothing beyond its name.
    ///
    /// Plainness gates fast paths such as standard-type simplification.
    pub fn is_plain(&self) -> bool {
        !self.is_const
            && !self.is_volatile
            && self.reference == ReferenceKind::None
            && self.indirections.is_empty()
            && self.array_dims.is_empty()
            && !self.is_function_pointer
            && self.instantiations.is_empty()
    }

    /// Merge a qualifier/indirection-only partial type onto a named base.
    ///
    /// The name, instantiations, and function-pointer shape come from the
    /// side that carries a name (`base` wins when both do); cv flags are
    /// or-ed; indirections and array dimensions concatenate outermost first,
    /// base before partial. Associative over the qualifier chain, not
    /// commutative in argument order.
    pub fn combine(base: &TypeInfo, partial: &TypeInfo) -> TypeInfo {
        let named = if base.qualified_name.is_empty() && !partial.qualified_name.is_empty() {
            partial
        } else {
            base
        };
        TypeInfo {
            qualified_name: named.qualified_name.clone(),
            instantiations: named.instantiations.clone(),
            is_function_pointer: named.is_function_pointer,
            arguments: named.arguments.clone(),
            is_const: base.is_const || partial.is_const,
            is_volatile: base.is_volatile || partial.is_volatile,
            reference: if base.reference != ReferenceKind::None {
                base.reference
            } else {
                partial.reference
            },
            indirections: base
                .indirections
                .iter()
                .chain(partial.indirections.iter())
                .copied()
                .collect(),
            array_dims: base
                .array_dims
                .iter()
                .chain(partial.array_dims.iter())
                .cloned()
                .collect(),
        }
    }

    /// Re-resolve a possibly scope-relative name against a lexical scope.
    ///
    /// Walks the scope chain outward; the first prefix under which the name
    /// is a known declaration rewrites the qualified name to its
    /// fully-qualified form. No match leaves the name unchanged (soft
    /// failure). Instantiation arguments are resolved against the same
    /// scope.
    pub fn resolve_type(&self, scope: &ScopeStack, decls: &DeclIndex) -> TypeInfo {
        let mut out = self.clone();
        out.instantiations = self
            .instantiations
            .iter()
            .map(|inst| inst.resolve_type(scope, decls))
            .collect();
        if self.qualified_name.is_empty() {
            return out;
        }

        let name = self.qualified_name.join("::");
        for prefix in scope.prefixes_outward() {
            let candidate = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}::{name}")
            };
            if decls.contains(&candidate) {
                out.qualified_name = candidate.split("::").map(String::from).collect();
                return out;
            }
        }
        tracing::debug!(name = %name, "no declaration found in scope chain, leaving name unchanged");
        out
    }

    /// Canonicalize a standard-type alias spelling.
    ///
    /// Only applies to types that carry nothing beyond name and
    /// instantiations; anything with qualifiers, indirections, references,
    /// arrays, or a function-pointer shape is returned unchanged. The alias
    /// table is policy supplied by the caller.
    pub fn simplify_std_type(&self, table: &StdTypeTable) -> TypeInfo {
        if self.is_const
            || self.is_volatile
            || self.reference != ReferenceKind::None
            || !self.indirections.is_empty()
            || !self.array_dims.is_empty()
            || self.is_function_pointer
        {
            return self.clone();
        }
        let name = self.qualified_name.join("::");
        let Some(canonical) = table.canonical(&name) else {
            return self.clone();
        };
        match TypeInfo::parse(canonical) {
            Ok(mut simplified) => {
                if simplified.instantiations.is_empty() {
                    simplified.instantiations = self.instantiations.clone();
                }
                simplified
            }
            Err(_) => self.clone(),
        }
    }
}

impl Display for TypeInfo {
    /// Canonical rendering; parsing the output yields an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            write!(f, "const ")?;
        }
        if self.is_volatile {
            write!(f, "volatile ")?;
        }
        write!(f, "{}", self.qualified_name.join("::"))?;
        if !self.instantiations.is_empty() {
            let args: Vec<String> = self.instantiations.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        if self.is_function_pointer {
            let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
            write!(f, " (*)({})", args.join(", "))?;
        }
        for dim in &self.array_dims {
            write!(f, "[{dim}]")?;
        }
        if !self.indirections.is_empty() {
            write!(f, " ")?;
            // Stored outermost first; rendered innermost first, each `*`
            // followed by its own qualifiers.
            for ind in self.indirections.iter().rev() {
                write!(f, "*")?;
                if ind.is_const {
                    write!(f, " const")?;
                }
                if ind.is_volatile {
                    write!(f, " volatile")?;
                }
            }
        }
        match self.reference {
            ReferenceKind::None => {}
            ReferenceKind::LValue => write!(f, " &")?,
            ReferenceKind::RValue => write!(f, " &&")?,
        }
        Ok(())
    }
}

/// True when `rest` ends at a token boundary (or is empty), so a trailing
/// keyword match is a real token and not a name suffix like `my_const`.
fn token_boundary(rest: &str) -> bool {
    rest.is_empty()
        || rest.ends_with(|c: char| c.is_whitespace() || c == '*' || c == '&' || c == '>')
}

fn strip_leading_cv(text: &str) -> (&str, bool, bool) {
    let mut t = text.trim_start();
    let mut is_const = false;
    let mut is_volatile = false;
    loop {
        if let Some(rest) = t.strip_prefix("const") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                is_const = true;
                t = rest.trim_start();
                continue;
            }
        }
        if let Some(rest) = t.strip_prefix("volatile") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                is_volatile = true;
                t = rest.trim_start();
                continue;
            }
        }
        break;
    }
    (t, is_const, is_volatile)
}

/// Splits `text` on commas outside any `<>`, `()`, or `[]` nesting.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

/// Splits trailing `[...]` groups (outermost first) off a spelling.
fn strip_array_dims<'a>(spelling: &str, s: &'a str) -> Result<(&'a str, Vec<String>)> {
    let bytes = s.as_bytes();
    let mut angle = 0i32;
    let mut paren = 0i32;
    let mut first = None;
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'<' => angle += 1,
            b'>' => angle -= 1,
            b'(' => paren += 1,
            b')' => paren -= 1,
            b'[' if angle == 0 && paren == 0 => {
                first = Some(i);
                break;
            }
            _ => {}
        }
    }
    let Some(first) = first else {
        return Ok((s, Vec::new()));
    };

    let mut dims = Vec::new();
    let mut i = first;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if bytes[i] != b'[' {
            return Err(Error::parse(spelling, "unexpected text after array dimensions"));
        }
        let start = i + 1;
        let mut depth = 1i32;
        let mut j = start;
        while j < bytes.len() && depth > 0 {
            match bytes[j] {
                b'[' => depth += 1,
                b']' => depth -= 1,
                _ => {}
            }
            j += 1;
        }
        if depth != 0 {
            return Err(Error::parse(spelling, "unbalanced array brackets"));
        }
        dims.push(s[start..j - 1].trim().to_string());
        i = j;
    }
    Ok((s[..first].trim_end(), dims))
}
