use pretty_assertions::assert_eq;
use rice_ir::{Field, GenericParamKind, GenericParameter, RecordType, ScopePath, ScopeSegment};

use super::*;

const PRELUDE: &str = "\
#pragma once

#include \"shapes.hpp\"
#include <MetaCompiler/ReflectionHelper.hpp>
";

fn circle() -> RecordType {
    let mut path = ScopePath::new();
    path.push(ScopeSegment::namespace("shapes"));
    let mut record = RecordType::new(path, "Circle", 3);
    record.reflectable = true;
    record.fields.push(Field::new("radius", "double"));
    record.fields.push(Field::new("center", "Point"));
    record
}

#[test]
fn empty_model_is_prelude_only() {
    assert_eq!(generate(&[], "shapes.hpp"), PRELUDE);
}

#[test]
fn plain_record() {
    let expected = format!(
        "{PRELUDE}
template <> struct Meta::TypeOf<shapes::Circle> {{
    Type<shapes::Circle, double, Point> type() {{
        return Type<shapes::Circle, double, Point>{{Types::Struct,
            {{\"radius\", &shapes::Circle::radius, {{}}}},
            {{\"center\", &shapes::Circle::center, {{}}}}}};
    }}
}};
"
    );
    assert_eq!(generate(&[circle()], "shapes.hpp"), expected);
}

#[test]
fn excluded_field_is_omitted() {
    let mut record = RecordType::new(ScopePath::new(), "Box", 1);
    record.generic_params.push(GenericParameter::type_param(0, 0, "T"));
    record.fields.push(Field::new("value", "T"));
    let mut cache = Field::new("cache", "int");
    cache.excluded = true;
    record.fields.push(cache);

    let expected = format!(
        "{PRELUDE}
template <typename T> struct Meta::TypeOf<Box<T>> {{
    Type<Box<T>, T> type() {{
        return Type<Box<T>, T>{{Types::Struct,
            {{\"value\", &Box<T>::value, {{}}}}}};
    }}
}};
"
    );
    let generated = generate(&[record], "shapes.hpp");
    assert_eq!(generated, expected);
    assert!(!generated.contains("cache"));
}

#[test]
fn attributes_are_listed_in_order() {
    let mut record = RecordType::new(ScopePath::new(), "Player", 1);
    let mut speed = Field::new("speed", "float");
    speed.attributes = vec!["range:0..10".to_string(), "editor:hidden".to_string()];
    record.fields.push(speed);

    let generated = generate(&[record], "shapes.hpp");
    assert!(generated.contains(
        "{\"speed\", &Player::speed, {\"range:0..10\", \"editor:hidden\"}}};"
    ));
}

#[test]
fn record_without_fields() {
    let record = RecordType::new(ScopePath::new(), "Tag", 1);
    let generated = generate(&[record], "shapes.hpp");
    assert!(generated.contains("        return Type<Tag>{Types::Struct};\n"));
}

#[test]
fn value_and_pack_parameters_in_heading() {
    let mut record = RecordType::new(ScopePath::new(), "Array", 1);
    record.generic_params.push(GenericParameter::type_param(0, 0, "T"));
    record.generic_params.push(GenericParameter {
        depth: 0,
        index: 1,
        name: "N".to_string(),
        kind: GenericParamKind::Value {
            ty: "int".to_string(),
        },
        pack: false,
    });
    let generated = generate(&[record], "shapes.hpp");
    assert!(generated.contains("template <typename T, int N> struct Meta::TypeOf<Array<T, N>> {"));
}

#[test]
fn records_follow_model_order() {
    let mut second = circle();
    second.name = "Square".to_string();
    let generated = generate(&[circle(), second], "shapes.hpp");
    let circle_at = generated.find("TypeOf<shapes::Circle>").unwrap_or(usize::MAX);
    let square_at = generated.find("TypeOf<shapes::Square>").unwrap_or(0);
    assert!(circle_at < square_at);
    // One blank line before each binding.
    assert_eq!(generated.matches("\n\ntemplate <>").count(), 2);
}

#[test]
fn string_literals_are_escaped() {
    let mut record = RecordType::new(ScopePath::new(), "Doc", 1);
    let mut field = Field::new("path", "int");
    field.attributes.push(r"dir:C:\tmp".to_string());
    record.fields.push(field);
    let generated = generate(&[record], "shapes.hpp");
    assert!(generated.contains(r#"{"dir:C:\\tmp"}"#));
}

#[test]
fn header_path_is_echoed() {
    let generated = generate(&[], "../include/game/player.hpp");
    assert!(generated.contains("#include \"../include/game/player.hpp\"\n"));
}
