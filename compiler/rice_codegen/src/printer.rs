//! Human-readable listing of the declaration model.
//!
//! ```text
//! template <typename T>
//! Box<T> {
//!     T value;
//!     int cache; // not reflectable
//! }
//! ```

use rice_ir::{Field, RecordType};

use crate::emitter::{Emitter, StringEmitter};

/// Print every record with all of its fields, excluded ones included.
pub fn print_model(records: &[RecordType]) -> String {
    let mut emitter = StringEmitter::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            emitter.emit_newline();
        }
        print_record(record, &mut emitter);
    }
    emitter.output()
}

fn print_record(record: &RecordType, emitter: &mut StringEmitter) {
    let heading = record.generic_heading();
    if !heading.is_empty() {
        emitter.emit(&heading);
        emitter.emit_newline();
    }
    emitter.emit(&record.qualified_name());
    emitter.emit(" {");
    emitter.emit_newline();
    for field in &record.fields {
        emitter.emit_indent(1);
        print_field(field, emitter);
        emitter.emit_newline();
    }
    emitter.emit("}");
    emitter.emit_newline();
}

fn print_field(field: &Field, emitter: &mut StringEmitter) {
    emitter.emit(&field.ty);
    emitter.emit_space();
    emitter.emit(&field.name);
    emitter.emit(";");

    if field.excluded {
        emitter.emit(" // not reflectable");
    } else if !field.attributes.is_empty() {
        emitter.emit(" // ");
        emitter.emit(&field.attributes.join(", "));
    }
}
