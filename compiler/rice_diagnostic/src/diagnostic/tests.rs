use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::warning(ErrorCode::W0001)
        .with_message("test warning")
        .with_line(12)
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::W0001);
    assert_eq!(diag.message, "test warning");
    assert_eq!(diag.line, 12);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_nested_in_generic_helper() {
    let diag = nested_in_generic("Inner", "Outer<T, U>", 40);

    assert_eq!(diag.code, ErrorCode::W0001);
    assert!(diag.message.contains("Inner"));
    assert!(diag.message.contains("Outer<T, U>"));
    assert_eq!(diag.line, 40);
}

#[test]
fn test_template_template_parameter_helper() {
    let diag = template_template_parameter("Holder<C, T>", "C", 9);

    assert_eq!(diag.code, ErrorCode::W0002);
    assert!(diag.message.contains("Holder<C, T>"));
    assert!(diag.message.contains("`C`"));
    assert_eq!(diag.line, 9);
}

#[test]
fn test_diagnostic_display() {
    let diag = nested_in_generic("Inner", "Outer<T>", 3);

    assert_eq!(
        diag.to_string(),
        "warning [W0001]: record `Inner` is nested inside generic record `Outer<T>`\n  \
         --> dump line 3\n  = note: no binding is generated for this record"
    );
}

#[test]
fn test_display_without_line() {
    let diag = Diagnostic::warning(ErrorCode::W0001).with_message("oops");
    assert_eq!(diag.to_string(), "warning [W0001]: oops");
}

#[test]
fn test_error_code_lookup() {
    assert_eq!(ErrorCode::parse("w0001"), Some(ErrorCode::W0001));
    assert_eq!(ErrorCode::parse(" W0002 "), Some(ErrorCode::W0002));
    assert_eq!(ErrorCode::parse("E9999"), None);
    assert!(!ErrorCode::W0001.description().is_empty());
    assert!(!ErrorCode::W0002.description().is_empty());
}
