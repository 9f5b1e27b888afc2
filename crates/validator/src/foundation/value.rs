//! Helpers over `serde_json::Value` shared by the engine and the rules.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Returns a reference to a shared `null`.
#[must_use]
pub fn null() -> &'static Value {
    &NULL
}

/// Returns true for the values the empty-to-null policy collapses:
/// `null`, `""`, `[]` and `{}`.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Returns true for a string that is empty once surrounding whitespace is removed.
#[must_use]
pub fn is_blank_string(value: &Value) -> bool {
    value.as_str().is_some_and(|text| text.trim().is_empty())
}

/// A short name for the JSON type of `value`.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!(" "), false)]
    #[case(json!(0), false)]
    #[case(json!(false), false)]
    #[case(json!("0"), false)]
    #[case(json!([null]), false)]
    fn empty_values(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_empty(&value), expected);
    }

    #[rstest]
    #[case(json!(""), true)]
    #[case(json!("  \t\n"), true)]
    #[case(json!(" a "), false)]
    #[case(json!(null), false)]
    #[case(json!(1), false)]
    fn blank_strings(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_blank_string(&value), expected);
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(&json!({"a": 1})), "object");
        assert_eq!(type_name(&json!([1])), "array");
        assert_eq!(type_name(&json!(1.5)), "number");
    }
}
