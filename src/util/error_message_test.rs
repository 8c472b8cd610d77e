use super::*;
use serde_json::json;

// =============================================================
// Scalar inputs
// =============================================================

#[test]
fn null_yields_empty_string() {
    assert_eq!(error_message(&Value::Null), "");
}

#[test]
fn string_passes_through_unchanged() {
    assert_eq!(error_message(&json!("boom")), "boom");
}

#[test]
fn idempotent_on_strings() {
    let once = error_message(&json!("already a message"));
    let twice = error_message(&Value::String(once.clone()));
    assert_eq!(once, twice);
}

#[test]
fn numbers_and_bools_use_fixed_fallback() {
    assert_eq!(error_message(&json!(42)), UNEXPECTED_ERROR);
    assert_eq!(error_message(&json!(true)), UNEXPECTED_ERROR);
}

#[test]
fn falsy_scalars_yield_empty_string() {
    assert_eq!(error_message(&json!(0)), "");
    assert_eq!(error_message(&json!(0.0)), "");
    assert_eq!(error_message(&json!(false)), "");
}

// =============================================================
// Objects
// =============================================================

#[test]
fn string_detail_wins() {
    let err = json!({ "detail": "email already registered", "message": "ignored" });
    assert_eq!(error_message(&err), "email already registered");
}

#[test]
fn structured_detail_is_serialized() {
    let err = json!({ "detail": [{ "loc": ["body", "email"], "msg": "invalid" }] });
    assert_eq!(
        error_message(&err),
        r#"[{"loc":["body","email"],"msg":"invalid"}]"#
    );
}

#[test]
fn message_field_used_without_detail() {
    let err = json!({ "message": "request failed" });
    assert_eq!(error_message(&err), "request failed");
}

#[test]
fn non_string_message_is_serialized_alone() {
    let err = json!({ "message": 42 });
    assert_eq!(error_message(&err), "42");

    let err = json!({ "message": { "code": 7 } });
    assert_eq!(error_message(&err), r#"{"code":7}"#);
}

#[test]
fn null_message_falls_back_to_whole_object() {
    let err = json!({ "message": null, "code": 7 });
    assert_eq!(error_message(&err), r#"{"code":7,"message":null}"#);
}

#[test]
fn unknown_object_is_serialized_whole() {
    let err = json!({ "code": 7 });
    assert_eq!(error_message(&err), r#"{"code":7}"#);
}

// =============================================================
// Arrays
// =============================================================

#[test]
fn array_elements_join_with_comma() {
    let err = json!(["first", { "message": "second" }]);
    assert_eq!(error_message(&err), "first, second");
}

// =============================================================
// Raw body parsing
// =============================================================

#[test]
fn body_text_parses_json_detail() {
    assert_eq!(
        error_message_from_text(r#"{"detail":"not found"}"#),
        "not found"
    );
}

#[test]
fn body_text_falls_back_to_plain_string() {
    assert_eq!(error_message_from_text("Internal Server Error"), "Internal Server Error");
}
