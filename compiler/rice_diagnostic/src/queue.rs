//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.

use crate::Diagnostic;

/// Collects diagnostics during a single parse.
///
/// Two diagnostics with the same code on the same dump line are reported
/// once. [`DiagnosticQueue::flush`] returns them sorted by line, keeping
/// insertion order for equal lines.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic. Returns `false` if it duplicated an earlier one.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let duplicate = self
            .diagnostics
            .iter()
            .any(|d| d.code == diag.code && d.line == diag.line && d.line != 0);
        if duplicate {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Drain the queue, sorted by dump line.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| d.line);
        out
    }
}
