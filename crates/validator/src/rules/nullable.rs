//! Presence rules
//!
//! The only two rules that reject `null`. Pair them with any other rule to
//! make a field required: `[not_null(), email()]`.

use std::num::FpCategory;

use serde_json::Value;

crate::rule! {
    /// Rejects `null`.
    pub NotNull as "not_null";
    message "This value should not be null.";
    strict rule(value) { !value.is_null() }
    fn not_null();
}

crate::rule! {
    /// Rejects `null`, `false`, numeric zero, `""`, `"0"`, `[]` and `{}`.
    ///
    /// A required checkbox sent as `false` therefore fails. Whitespace-only
    /// strings are not empty.
    pub NotEmpty as "not_empty";
    message "This value should not be empty.";
    strict rule(input) { !is_empty_input(input) }
    fn not_empty();
}

/// Emptiness as understood by form input, wider than the empty-to-null policy.
fn is_empty_input(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
