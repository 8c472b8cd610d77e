//! Error message normalization.
//!
//! The backend reports failures in several shapes: a bare string, a
//! FastAPI-style object with a `detail` field (which may itself be a
//! string or a structured validation payload), an object with a
//! `message` field, or an array of any of these. This module collapses
//! all of them into one human-readable string so slices only ever store
//! `Option<String>` errors.
//!
//! This is the terminal handler for failures: it never panics and never
//! returns an error itself.

#[cfg(test)]
#[path = "error_message_test.rs"]
mod error_message_test;

use serde_json::Value;

/// Fallback when an error object cannot be serialized.
const UNKNOWN_ERROR: &str = "An unknown error occurred";
/// Fallback for values that are not strings, objects, or arrays.
const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Extract a human-readable message from an arbitrary error payload.
///
/// Rules, in order:
/// - `null`, `false`, zero → empty string
/// - string → returned unchanged
/// - object with `detail` → the detail string, or its serialized form
/// - object with `message` → the message string, or its serialized form
/// - array → each element normalized and joined with `", "`
/// - any other object → serialized whole, or a fixed fallback
/// - remaining numbers/booleans → a fixed fallback
pub fn error_message(error: &Value) -> String {
    match error {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(error_message)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => {
            if let Some(detail) = map.get("detail") {
                return match detail {
                    Value::String(s) => s.clone(),
                    other => serde_json::to_string(other)
                        .unwrap_or_else(|_| UNKNOWN_ERROR.to_owned()),
                };
            }
            match map.get("message") {
                Some(Value::String(message)) => return message.clone(),
                Some(Value::Null) | None => {}
                Some(other) => {
                    return serde_json::to_string(other)
                        .unwrap_or_else(|_| UNKNOWN_ERROR.to_owned());
                }
            }
            serde_json::to_string(map).unwrap_or_else(|_| UNKNOWN_ERROR.to_owned())
        }
        _ => UNEXPECTED_ERROR.to_owned(),
    }
}

/// Normalize a raw response body: parsed as JSON when possible, otherwise
/// treated as a plain string message.
pub fn error_message_from_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => error_message(&value),
        Err(_) => body.to_owned(),
    }
}
