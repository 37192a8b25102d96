//! Declaration dispatcher.
//!
//! Recognizes one line kind by its node name and updates the open model.
//! Each recognizer returns `None` for "not this kind, or malformed"; the
//! line is then skipped without touching the model. Whatever happens, the
//! cursor ends up at the start of the next line.

use rice_ir::{Field, GenericParamKind, GenericParameter, RecordType};
use tracing::{debug, trace};

use crate::classify::skip_indentation;
use crate::tokenize::{drop_trailing, quoted_fragment, split_args, type_fragment, Args};
use crate::{OpenRecord, Parser};

const RECORD_DECL: &str = "CXXRecordDecl";
const FIELD_DECL: &str = "FieldDecl";
const ANNOTATE_ATTR: &str = "AnnotateAttr";
const NAMESPACE_DECL: &str = "NamespaceDecl";
const CLASS_TEMPLATE_DECL: &str = "ClassTemplateDecl";
const SPECIALIZATION_DECL: &str = "ClassTemplateSpecializationDecl";
const PARTIAL_SPECIALIZATION_DECL: &str = "ClassTemplatePartialSpecializationDecl";
const TYPE_PARAM_DECL: &str = "TemplateTypeParmDecl";
const VALUE_PARAM_DECL: &str = "NonTypeTemplateParmDecl";
const TEMPLATE_PARAM_DECL: &str = "TemplateTemplateParmDecl";

const REFLECTABLE: &str = "reflectable";
const NOT_REFLECTABLE: &str = "not_reflectable";

/// What a dispatched line asks the driver to do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum LineOutcome {
    /// No new scope; the line was ignored or only updated the model.
    Nothing,
    /// A namespace body follows. The name is empty for anonymous namespaces.
    NamespaceOpened { name: String },
    /// A record body follows; the record is on top of the open-record stack.
    RecordOpened,
    /// A template declaration's children follow.
    GenericScopeOpened,
    /// A class template specialization follows. Its body repeats members
    /// of the primary template (including nested records) outside any
    /// generic scope, so none of it is read.
    SpecializationOpened,
}

/// Which template parameter node is being read.
#[derive(Copy, Clone, Debug)]
enum ParamSyntax {
    Type,
    Value,
    Template,
}

fn is_record_keyword(token: &str) -> bool {
    matches!(token, "struct" | "class")
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Parse the number following `keyword`, e.g. `depth 0`.
fn number_after(args: &[&str], keyword: &str) -> Option<u32> {
    let at = args.iter().position(|a| *a == keyword)?;
    args.get(at + 1)?.parse().ok()
}

impl<'a> Parser<'a> {
    /// Dispatch the line at the cursor and advance past it.
    pub(crate) fn dispatch_line(&mut self, depth: u32) -> LineOutcome {
        skip_indentation(&mut self.cursor);
        self.cursor.skip_run(b'-');
        if let Some(open) = self.open_records.last_mut() {
            if open.body_depth == depth {
                open.field_is_latest = false;
            }
        }
        let outcome = self.recognize(depth).unwrap_or(LineOutcome::Nothing);
        self.cursor.skip_to_newline();
        self.line += 1;
        outcome
    }

    fn recognize(&mut self, depth: u32) -> Option<LineOutcome> {
        if let Some(text) = self.keyword_args(RECORD_DECL) {
            self.record_declaration(text, depth)
        } else if let Some(text) = self.keyword_args(FIELD_DECL) {
            self.field_declaration(text, depth)
        } else if let Some(text) = self.keyword_args(ANNOTATE_ATTR) {
            self.annotation(text, depth)
        } else if let Some(text) = self.keyword_args(NAMESPACE_DECL) {
            self.namespace_declaration(text)
        } else if self.keyword_args(CLASS_TEMPLATE_DECL).is_some() {
            Some(LineOutcome::GenericScopeOpened)
        } else if self.keyword_args(SPECIALIZATION_DECL).is_some()
            || self.keyword_args(PARTIAL_SPECIALIZATION_DECL).is_some()
        {
            trace!(line = self.line, "skipping template specialization");
            Some(LineOutcome::SpecializationOpened)
        } else if let Some(text) = self.keyword_args(TYPE_PARAM_DECL) {
            self.generic_parameter(text, ParamSyntax::Type)
        } else if let Some(text) = self.keyword_args(VALUE_PARAM_DECL) {
            self.generic_parameter(text, ParamSyntax::Value)
        } else if let Some(text) = self.keyword_args(TEMPLATE_PARAM_DECL) {
            self.generic_parameter(text, ParamSyntax::Template)
        } else {
            None
        }
    }

    /// Descriptor text after `keyword`, if the line is that node kind.
    fn keyword_args(&self, keyword: &str) -> Option<&'a str> {
        if !self.cursor.matches_prefix(keyword) {
            return None;
        }
        let rest = self.cursor.rest_of_line().get(keyword.len()..)?;
        (rest.is_empty() || rest.starts_with(' ')).then_some(rest)
    }

    fn split_line(&self, text: &'a str) -> Option<Args<'a>> {
        match split_args(text) {
            Ok(args) => Some(args),
            Err(error) => {
                trace!(line = self.line, %error, "skipping malformed line");
                None
            }
        }
    }

    // === Records ===

    fn record_declaration(&mut self, text: &'a str, depth: u32) -> Option<LineOutcome> {
        if !self.cursor.find_before("struct", b'\n') && !self.cursor.find_before("class", b'\n') {
            return None;
        }
        let mut args = self.split_line(text)?;
        if args.contains(&"implicit") || !args.iter().any(|a| is_record_keyword(a)) {
            return None;
        }
        // Forward declarations have no body.
        if !drop_trailing(&mut args, "definition") {
            return None;
        }
        let name = *args.last()?;
        if is_record_keyword(name) {
            // Anonymous struct or class.
            return None;
        }

        let mut record = RecordType::new(self.scope_path.clone(), name, self.line);
        if let Some(scope) = self.generic_scopes.last() {
            if scope.body_depth == depth {
                record.generic_params.clone_from(&scope.params);
            }
        }
        debug!(line = self.line, record = name, generic = record.is_generic(), "record declaration");

        self.open_records.push(OpenRecord {
            record,
            body_depth: depth + 1,
            field_is_latest: false,
        });
        Some(LineOutcome::RecordOpened)
    }

    fn field_declaration(&mut self, text: &'a str, depth: u32) -> Option<LineOutcome> {
        // Fields of nested nodes (template specializations, local classes)
        // sit deeper than the record body and do not belong to it.
        if self.open_records.last()?.body_depth != depth {
            return None;
        }
        let mut args = self.split_line(text)?;
        // Anonymous union and struct members.
        if args.contains(&"implicit") {
            return None;
        }
        drop_trailing(&mut args, "mutable");
        let [.., name, ty] = args.as_slice() else {
            return None;
        };
        if !is_identifier(name) {
            // Unnamed bit-field.
            return None;
        }
        let ty = type_fragment(ty)?;

        let open = self.open_records.last_mut()?;
        trace!(line = self.line, field = *name, ty, "field declaration");
        open.record.fields.push(Field::new(*name, ty));
        open.field_is_latest = true;
        Some(LineOutcome::Nothing)
    }

    fn annotation(&mut self, text: &'a str, depth: u32) -> Option<LineOutcome> {
        let open = self.open_records.last_mut()?;
        // Record attributes sit in the body; field attributes one level below.
        if depth < open.body_depth || depth > open.body_depth + 1 {
            return None;
        }
        let value = quoted_fragment(text)?;

        if value == REFLECTABLE {
            open.record.reflectable = true;
            return Some(LineOutcome::Nothing);
        }
        // Annotations of methods and unread nested records sit at the same
        // depth as field annotations.
        if depth != open.body_depth + 1 || !open.field_is_latest {
            return None;
        }
        let field = open.record.fields.last_mut()?;
        if value == NOT_REFLECTABLE {
            field.excluded = true;
        } else {
            field.attributes.push(value.to_string());
        }
        Some(LineOutcome::Nothing)
    }

    // === Namespaces ===

    fn namespace_declaration(&mut self, text: &'a str) -> Option<LineOutcome> {
        let mut args = self.split_line(text)?;
        // A reopened namespace points back at the original declaration.
        if let Some(at) = args.iter().position(|a| *a == "original") {
            args.truncate(at);
        }
        while drop_trailing(&mut args, "inline") || drop_trailing(&mut args, "nested") {}

        let last = *args.last()?;
        // Anonymous namespaces end with their source location.
        let name = if is_identifier(last) { last } else { "" };
        debug!(line = self.line, namespace = name, "namespace declaration");
        Some(LineOutcome::NamespaceOpened {
            name: name.to_string(),
        })
    }

    // === Generics ===

    fn generic_parameter(&mut self, text: &'a str, syntax: ParamSyntax) -> Option<LineOutcome> {
        let expected_depth = self.generic_scopes.len().checked_sub(1)?;
        let args = self.split_line(text)?;

        let name = *args.last()?;
        if name.parse::<u64>().is_ok() || !is_identifier(name) {
            // Unnamed parameter: the index is the last token.
            return None;
        }
        let depth = number_after(&args, "depth")?;
        let index = number_after(&args, "index")?;
        let kind = match syntax {
            ParamSyntax::Type => GenericParamKind::Type,
            ParamSyntax::Value => {
                let ty = args.iter().find(|a| a.starts_with('\''))?;
                GenericParamKind::Value {
                    ty: quoted_fragment(ty)?.to_string(),
                }
            }
            ParamSyntax::Template => GenericParamKind::Template,
        };
        let pack = args.contains(&"...");

        let scope = self.generic_scopes.last_mut()?;
        if usize::try_from(depth).ok() != Some(expected_depth)
            || usize::try_from(index).ok() != Some(scope.params.len())
        {
            trace!(line = self.line, depth, index, "generic parameter outside innermost scope");
            return None;
        }
        scope.params.push(GenericParameter {
            depth,
            index,
            name: name.to_string(),
            kind,
            pack,
        });
        Some(LineOutcome::Nothing)
    }
}
