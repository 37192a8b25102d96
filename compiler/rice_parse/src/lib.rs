//! Recursive descent reader for clang AST dumps.
//!
//! Rebuilds the scoped declaration model from the indentation-encoded dump
//! text without materializing a tree. The only structural signal is each
//! line's depth; everything else lives on three stacks owned by [`Parser`]:
//!
//! - the scope path (namespaces and records entered so far),
//! - the open-record stack (records whose body is still being read),
//! - the generic-scope stack (template declarations still open).
//!
//! Unrecognized or malformed lines are skipped. The only condition reported
//! back is a reflectable record nested inside a generic record, which is
//! left out of the output with a warning.

mod classify;
mod descent;
mod dispatch;
mod stack;
mod tokenize;

use rice_cursor::Cursor;
use rice_diagnostic::{Diagnostic, DiagnosticQueue};
use rice_ir::{GenericScope, RecordType, ScopePath};

/// Result of parsing one dump.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOutput {
    /// Retained (reflectable) records, in the order their scopes closed.
    pub records: Vec<RecordType>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A record whose body is still being read.
#[derive(Debug)]
struct OpenRecord {
    record: RecordType,
    /// Depth of the record's direct children in the dump.
    body_depth: u32,
    /// The latest line at `body_depth` was an accepted field, so
    /// annotations one level deeper belong to that field.
    field_is_latest: bool,
}

/// Traversal state for one dump.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// 1-based number of the line being dispatched. Every line is
    /// dispatched exactly once, in order.
    line: u32,
    scope_path: ScopePath,
    open_records: Vec<OpenRecord>,
    generic_scopes: Vec<GenericScope>,
    retained: Vec<RecordType>,
    diagnostics: DiagnosticQueue,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `dump`.
    pub fn new(dump: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(dump),
            line: 1,
            scope_path: ScopePath::new(),
            open_records: Vec::new(),
            generic_scopes: Vec::new(),
            retained: Vec::new(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    /// Walk the whole dump and return the retained records.
    pub fn parse(mut self) -> ParseOutput {
        self.descend(1);
        debug_assert!(self.scope_path.is_empty(), "scope path not unwound");
        debug_assert!(self.open_records.is_empty(), "record left open");
        debug_assert!(self.generic_scopes.is_empty(), "generic scope left open");
        ParseOutput {
            records: self.retained,
            diagnostics: self.diagnostics.flush(),
        }
    }
}

/// Parse a complete dump.
pub fn parse(dump: &str) -> ParseOutput {
    Parser::new(dump).parse()
}

#[cfg(test)]
mod tests;
