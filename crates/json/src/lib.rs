//! Facade over the native JSON serializer.
//!
//! Calling code goes through these functions instead of depending on a
//! specific JSON engine. Several operations are deliberate no-ops kept
//! for call-site compatibility: the escaping and static checking they
//! used to perform only mattered when JSON text was handed to a dynamic
//! evaluator, which no caller does anymore.

mod error;

pub use error::JsonError;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Number of indent characters the serializer honors.
const MAX_INDENT_CHARS: usize = 10;

/// Converts a value to compact JSON text.
pub fn stringify(value: &Value) -> String {
    value.to_string()
}

/// Converts a value to JSON text, indenting successive nesting levels by
/// `indent`, truncated to its first ten characters. Callers must not
/// assume more than ten characters of indent take effect.
///
/// An empty indent yields compact output, matching the native
/// serializer's treatment of an empty space argument.
pub fn stringify_with_indent(value: &Value, indent: &str) -> String {
    let indent: String = indent.chars().take(MAX_INDENT_CHARS).collect();
    if indent.is_empty() {
        return stringify(value);
    }
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    // Writing a Value into a Vec cannot fail, and the output is UTF-8.
    value
        .serialize(&mut ser)
        .expect("serializing a Value into a Vec cannot fail");
    String::from_utf8(out).expect("JSON output is UTF-8")
}

/// Escapes JSON text so it could be passed to a dynamic evaluator.
///
/// Now the identity function: no caller evaluates JSON dynamically
/// anymore, so the historical control-character escaping is gone for
/// good. Kept as a pass-through for call-site compatibility.
pub fn escape_json_for_eval(text: &str) -> String {
    text.to_owned()
}

/// Returns the quoted, escaped JSON form of `text`, i.e. `text`
/// serialized as a JSON string value.
pub fn escape_value(text: &str) -> String {
    stringify(&Value::String(text.to_owned()))
}

/// Parses `text` as JSON.
///
/// The payload must evaluate to an object or an array; bare primitive
/// and string roots are rejected. Fails with
/// [`JsonError::InvalidInput`], carrying the parser diagnostic and
/// `text` verbatim.
pub fn safe_eval(text: &str) -> Result<Value, JsonError> {
    let value: Value = serde_json::from_str(text).map_err(|err| JsonError::InvalidInput {
        message: err.to_string(),
        text: text.to_owned(),
    })?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(JsonError::InvalidInput {
            message: "payload must evaluate to an object or an array".to_owned(),
            text: text.to_owned(),
        }),
    }
}

/// Whether `text` may be fed to a dynamic evaluator safely.
///
/// Hard-coded to `true`: every caller parses through [`safe_eval`] now
/// and nothing is ever evaluated, so the historical static heuristic is
/// gone for good. A `true` result says nothing about whether `text` is
/// valid JSON.
pub fn safe_to_eval(text: &str) -> bool {
    let _ = text;
    true
}

/// Parses `text` as JSON without validation. Delegates to [`safe_eval`];
/// kept for call sites that historically bypassed validation.
pub fn unsafe_eval(text: &str) -> Result<Value, JsonError> {
    safe_eval(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stringify_compact() {
        assert_eq!(
            stringify(&json!({"a": 1, "b": [true, null]})),
            r#"{"a":1,"b":[true,null]}"#
        );
    }

    #[test]
    fn escape_value_quotes_and_escapes() {
        assert_eq!(escape_value("hi\"there"), "\"hi\\\"there\"");
        assert_eq!(escape_value(""), "\"\"");
        assert_eq!(escape_value("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn safe_eval_rejects_malformed_input() {
        let err = safe_eval("{invalid").unwrap_err();
        let JsonError::InvalidInput { text, .. } = &err;
        assert_eq!(text, "{invalid");
        assert!(err.to_string().ends_with("{invalid"));
    }

    #[test]
    fn safe_eval_rejects_primitive_roots() {
        for input in ["42", "\"hi\"", "true", "null"] {
            assert!(safe_eval(input).is_err(), "accepted {input}");
        }
    }
}
