//! Character-class rules
//!
//! Both rules count Unicode scalar values, so `"Zoë"` is alphabetic. The empty
//! string contains no letters and fails.

crate::rule! {
    /// Accepts non-empty strings made only of letters.
    pub Alphabetic as "alphabetic";
    message "This value should be of type {{ type }}." with { "type" => "alphabetic" };
    rule(value) {
        value
            .as_str()
            .is_some_and(|text| !text.is_empty() && text.chars().all(char::is_alphabetic))
    }
    fn alphabetic();
}

crate::rule! {
    /// Accepts non-empty strings made only of letters and digits.
    pub Alphanumeric as "alphanumeric";
    message "This value should be of type {{ type }}." with { "type" => "alphanumeric" };
    rule(value) {
        value
            .as_str()
            .is_some_and(|text| !text.is_empty() && text.chars().all(char::is_alphanumeric))
    }
    fn alphanumeric();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, Value};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("phpdevcommunity"), true)]
    #[case(json!("Zoë"), true)]
    #[case(json!(null), true)]
    #[case(json!("12"), false)]
    #[case(json!("John Doe"), false)]
    #[case(json!(""), false)]
    #[case(json!(42), false)]
    fn alphabetic_cases(#[case] value: Value, #[case] valid: bool) {
        assert_eq!(alphabetic().validate(&value).is_ok(), valid);
    }

    #[rstest]
    #[case(json!("abc123"), true)]
    #[case(json!("abc-123"), false)]
    #[case(json!(""), false)]
    #[case(json!(["a"]), false)]
    fn alphanumeric_cases(#[case] value: Value, #[case] valid: bool) {
        assert_eq!(alphanumeric().validate(&value).is_ok(), valid);
    }

    #[test]
    fn reports_its_type() {
        let failure = alphabetic().validate(&json!("12")).unwrap_err();
        assert_eq!(failure.message(), Some("This value should be of type alphabetic."));

        let failure = alphanumeric().validate(&json!("?")).unwrap_err();
        assert_eq!(failure.message(), Some("This value should be of type alphanumeric."));
    }
}
