//! Reflection binding generation.
//!
//! Each retained record becomes one `Meta::TypeOf` specialization:
//!
//! ```text
//! template <> struct Meta::TypeOf<shapes::Circle> {
//!     Type<shapes::Circle, double, shapes::Point> type() {
//!         return Type<shapes::Circle, double, shapes::Point>{Types::Struct,
//!             {"radius", &shapes::Circle::radius, {}},
//!             {"center", &shapes::Circle::center, {}}};
//!     }
//! };
//! ```
//!
//! Generic records use their own `template <...>` heading instead of
//! `template <>`. Excluded fields appear in neither the type list nor the
//! descriptor list.

use rice_ir::{Field, RecordType};
use tracing::debug;

use crate::emitter::{Emitter, StringEmitter};

/// Include line for the reflection helper declarations.
pub const REFLECTION_HELPER_INCLUDE: &str = "#include <MetaCompiler/ReflectionHelper.hpp>";

const SPECIALIZATION_HEADING: &str = "template <>";

/// Generate the binding header for `records` as a string.
pub fn generate(records: &[RecordType], header_path: &str) -> String {
    let mut emitter = StringEmitter::with_capacity(256 + records.len() * 256);
    generate_into(records, header_path, &mut emitter);
    emitter.output()
}

/// Generate the binding header for `records` into `emitter`.
///
/// `header_path` is echoed verbatim in the first include line.
pub fn generate_into<E: Emitter>(records: &[RecordType], header_path: &str, emitter: &mut E) {
    emit_prelude(header_path, emitter);
    for record in records {
        debug!(record = %record.qualified_name(), "generating binding");
        emitter.emit_newline();
        emit_binding(record, emitter);
    }
}

fn emit_prelude<E: Emitter>(header_path: &str, emitter: &mut E) {
    emitter.emit("#pragma once");
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.emit("#include \"");
    emitter.emit(header_path);
    emitter.emit("\"");
    emitter.emit_newline();
    emitter.emit(REFLECTION_HELPER_INCLUDE);
    emitter.emit_newline();
}

fn emit_binding<E: Emitter>(record: &RecordType, emitter: &mut E) {
    let qualified = record.qualified_name();
    let fields: Vec<&Field> = record.reflected_fields().collect();
    let type_list = type_list(&qualified, &fields);

    let heading = record.generic_heading();
    emitter.emit(if heading.is_empty() {
        SPECIALIZATION_HEADING
    } else {
        &heading
    });
    emitter.emit(" struct Meta::TypeOf<");
    emitter.emit(&qualified);
    emitter.emit("> {");
    emitter.emit_newline();

    emitter.emit_indent(1);
    emitter.emit(&type_list);
    emitter.emit(" type() {");
    emitter.emit_newline();

    emitter.emit_indent(2);
    emitter.emit("return ");
    emitter.emit(&type_list);
    emitter.emit("{Types::Struct");
    for field in &fields {
        emitter.emit(",");
        emitter.emit_newline();
        emitter.emit_indent(3);
        emit_descriptor(&qualified, field, emitter);
    }
    emitter.emit("};");
    emitter.emit_newline();

    emitter.emit_indent(1);
    emitter.emit("}");
    emitter.emit_newline();
    emitter.emit("};");
    emitter.emit_newline();
}

/// `Type<Qualified, T1, T2>`.
fn type_list(qualified: &str, fields: &[&Field]) -> String {
    let mut out = format!("Type<{qualified}");
    for field in fields {
        out.push_str(", ");
        out.push_str(&field.ty);
    }
    out.push('>');
    out
}

/// `{"name", &Qualified::name, {"attr", ...}}`.
fn emit_descriptor<E: Emitter>(qualified: &str, field: &Field, emitter: &mut E) {
    emitter.emit("{");
    emit_string_literal(&field.name, emitter);
    emitter.emit(", &");
    emitter.emit(qualified);
    emitter.emit("::");
    emitter.emit(&field.name);
    emitter.emit(", {");
    for (i, attribute) in field.attributes.iter().enumerate() {
        if i > 0 {
            emitter.emit(",");
            emitter.emit_space();
        }
        emit_string_literal(attribute, emitter);
    }
    emitter.emit("}}");
}

fn emit_string_literal<E: Emitter>(text: &str, emitter: &mut E) {
    emitter.emit("\"");
    let mut rest = text;
    while let Some(at) = rest.find(['"', '\\']) {
        emitter.emit(&rest[..at]);
        emitter.emit("\\");
        emitter.emit(&rest[at..=at]);
        rest = &rest[at + 1..];
    }
    emitter.emit(rest);
    emitter.emit("\"");
}

#[cfg(test)]
mod tests;
