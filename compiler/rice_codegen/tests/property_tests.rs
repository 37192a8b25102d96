//! Property tests for generation over arbitrary record models.

use proptest::prelude::*;
use rice_codegen::{generate, print_model};
use rice_ir::{Field, RecordType, ScopePath, ScopeSegment};

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn field() -> impl Strategy<Value = Field> {
    (ident(), "(int|double|T|std::vector<int>)", any::<bool>()).prop_map(|(name, ty, excluded)| {
        let mut field = Field::new(name, ty);
        field.excluded = excluded;
        field
    })
}

fn record() -> impl Strategy<Value = RecordType> {
    (
        prop::collection::vec(ident(), 0..3),
        ident(),
        prop::collection::vec(field(), 0..6),
    )
        .prop_map(|(namespaces, name, fields)| {
            let path: ScopePath = namespaces.into_iter().map(ScopeSegment::namespace).collect();
            let mut record = RecordType::new(path, format!("R{name}"), 1);
            record.reflectable = true;
            record.fields = fields;
            record
        })
}

proptest! {
    #[test]
    fn generation_is_deterministic(records in prop::collection::vec(record(), 0..4)) {
        prop_assert_eq!(generate(&records, "a.hpp"), generate(&records, "a.hpp"));
    }

    #[test]
    fn one_binding_per_record(records in prop::collection::vec(record(), 0..4)) {
        let generated = generate(&records, "a.hpp");
        prop_assert_eq!(generated.matches("struct Meta::TypeOf<").count(), records.len());
    }

    #[test]
    fn descriptors_follow_reflected_fields(record in record()) {
        let generated = generate(std::slice::from_ref(&record), "a.hpp");
        let qualified = record.qualified_name();
        let mut last = 0;
        for field in &record.fields {
            let descriptor = format!("{{\"{}\", &{}::{}, {{}}}}", field.name, qualified, field.name);
            let found = generated[last..].find(&descriptor);
            if field.excluded {
                prop_assert!(!generated.contains(&descriptor) || record.reflected_fields().any(|f| f.name == field.name));
            } else {
                prop_assert!(found.is_some(), "missing {}", descriptor);
                if let Some(at) = found {
                    last += at + descriptor.len();
                }
            }
        }
    }

    #[test]
    fn printer_lists_every_field(record in record()) {
        let printed = print_model(std::slice::from_ref(&record));
        prop_assert_eq!(printed.lines().count(), record.fields.len() + 2);
    }
}
