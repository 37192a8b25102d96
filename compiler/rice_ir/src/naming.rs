//! Qualified-name and generic-heading rendering.
//!
//! Shared by the generator and the model printer so both spell a record the
//! same way.

use std::fmt::Write;

use crate::{GenericParamKind, GenericParameter, ScopeSegment, SCOPE_SEPARATOR};

/// Join the non-empty rendered segment names with `::`.
///
/// Anonymous namespaces have empty names and are skipped.
pub fn location(path: &[ScopeSegment]) -> String {
    let mut out = String::new();
    for segment in path.iter().filter(|s| !s.rendered.is_empty()) {
        if !out.is_empty() {
            out.push_str(SCOPE_SEPARATOR);
        }
        out.push_str(&segment.rendered);
    }
    out
}

/// `outer::inner::Name<T>`.
pub fn qualified_name(path: &[ScopeSegment], name: &str, params: &[GenericParameter]) -> String {
    let mut out = location(path);
    if !out.is_empty() {
        out.push_str(SCOPE_SEPARATOR);
    }
    out.push_str(&with_generic_arguments(name, params));
    out
}

/// `Name<T, U>`, or just `Name` when there are no parameters.
pub fn with_generic_arguments(name: &str, params: &[GenericParameter]) -> String {
    let mut out = String::from(name);
    out.push_str(&generic_arguments(params));
    out
}

/// `<T, Ts...>` or an empty string.
pub fn generic_arguments(params: &[GenericParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::from("<");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.name);
        if param.pack {
            out.push_str("...");
        }
    }
    out.push('>');
    out
}

/// `template <typename T, int N>` or an empty string.
pub fn generic_heading(params: &[GenericParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::from("template <");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let ty = match &param.kind {
            GenericParamKind::Type => "typename",
            GenericParamKind::Value { ty } => ty.as_str(),
            GenericParamKind::Template => "template <class...> class",
        };
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{ty}{} {}",
            if param.pack { "..." } else { "" },
            param.name
        );
    }
    out.push('>');
    out
}
