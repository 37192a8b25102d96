//! Depth-driven walk over the dump.
//!
//! `descend(target)` consumes every line at `target` depth until it meets a
//! shallower line, which it leaves unconsumed for its caller. A deeper line
//! is not consumed either: the call recurses one level and the deeper call
//! re-reads it.

use std::cmp::Ordering;

use rice_diagnostic::{nested_in_generic, template_template_parameter};
use rice_ir::{GenericScope, RecordSlot, ScopeSegment};
use tracing::{debug, trace_span, warn};

use crate::classify::line_depth;
use crate::dispatch::LineOutcome;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn descend(&mut self, target: u32) {
        ensure_sufficient_stack(|| self.descend_level(target));
    }

    fn descend_level(&mut self, target: u32) {
        let _span = trace_span!("descend", depth = target).entered();

        while !self.cursor.is_eof() {
            let line_start = self.cursor.mark();
            let depth = line_depth(&mut self.cursor);

            match depth.cmp(&target) {
                Ordering::Equal => {
                    let outcome = self.dispatch_line(depth);
                    self.enter(outcome, target);
                }
                Ordering::Greater => {
                    self.cursor.reset(line_start);
                    self.descend(target + 1);
                }
                Ordering::Less => {
                    self.cursor.reset(line_start);
                    return;
                }
            }
        }
    }

    /// Act on what the dispatcher reported for a line at `target` depth.
    fn enter(&mut self, outcome: LineOutcome, target: u32) {
        match outcome {
            LineOutcome::Nothing => {}
            LineOutcome::NamespaceOpened { name } => {
                self.scope_path.push(ScopeSegment::namespace(name));
                self.descend(target + 1);
                self.scope_path.pop();
            }
            LineOutcome::RecordOpened => {
                let Some(open) = self.open_records.last() else {
                    return;
                };
                let slot = RecordSlot::new(self.open_records.len() - 1);
                let segment = ScopeSegment::record(slot, &open.record);
                self.scope_path.push(segment);
                self.descend(target + 1);
                self.scope_path.pop();
                self.finalize_record();
            }
            LineOutcome::GenericScopeOpened => {
                self.generic_scopes.push(GenericScope::new(target + 1));
                self.descend(target + 1);
                self.generic_scopes.pop();
            }
            LineOutcome::SpecializationOpened => self.skip_subtree(target),
        }
    }

    /// Consume every line deeper than `target` without dispatching it.
    fn skip_subtree(&mut self, target: u32) {
        while !self.cursor.is_eof() {
            let line_start = self.cursor.mark();
            if line_depth(&mut self.cursor) <= target {
                self.cursor.reset(line_start);
                return;
            }
            self.cursor.skip_to_newline();
            self.line += 1;
        }
    }

    /// Pop the innermost record and keep it if it is reflectable.
    fn finalize_record(&mut self) {
        let Some(open) = self.open_records.pop() else {
            return;
        };
        let record = open.record;
        if !record.reflectable {
            return;
        }

        if record.is_nested_in_generic() {
            let ancestor = self.generic_ancestor_name(&record.path);
            let name = record.qualified_name();
            warn!(record = %name, ancestor = %ancestor, "skipping record nested in generic record");
            self.diagnostics
                .add(nested_in_generic(&name, &ancestor, record.line));
            return;
        }

        if let Some(param) = record.template_template_param() {
            let name = record.qualified_name();
            warn!(record = %name, param = %param.name, "skipping record with template template parameter");
            self.diagnostics
                .add(template_template_parameter(&name, &param.name, record.line));
            return;
        }

        debug!(record = %record.qualified_name(), fields = record.fields.len(), "retained record");
        self.retained.push(record);
    }

    /// Qualified name of the innermost generic record enclosing `path`.
    ///
    /// Enclosing records are still open here, so the slot relation is valid
    /// and the ancestor is rendered from its live entry.
    fn generic_ancestor_name(&self, path: &[ScopeSegment]) -> String {
        let Some(segment) = path.iter().rev().find(|s| s.is_generic_record()) else {
            return String::new();
        };
        segment
            .record_slot()
            .and_then(|slot| self.open_records.get(slot.index()))
            .map_or_else(|| segment.rendered.clone(), |open| open.record.qualified_name())
    }
}
