//! String content rules
//!
//! Rules for checking well-known string formats.

use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

fn is_url(text: &str) -> bool {
    ::url::Url::parse(text).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Validates an email address.
    ///
    /// The domain needs at least one dot, so `dev@localhost` is rejected.
    pub Email as "email";
    message "{{ value }} is not a valid email address.";
    rule(value) { value.as_str().is_some_and(|text| EMAIL_REGEX.is_match(text)) }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Validates an absolute URL with a host.
    pub Url as "url";
    message "{{ value }} is not a valid URL.";
    rule(value) { value.as_str().is_some_and(is_url) }
    fn url();
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
    #[case("dev@phpdevcommunity.com")]
    #[case("first.last+tag@sub.example.org")]
    fn accepts_emails(#[case] input: &str) {
        assert!(email().validate(&json!(input)).is_ok());
    }

    #[rstest]
    #[case("dev@phpdevcommunity")]
    #[case("invalid-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@.com")]
    fn rejects_emails(#[case] input: &str) {
        assert!(email().validate(&json!(input)).is_err());
    }

    #[test]
    fn email_message() {
        let failure = email().validate(&json!("dev@example")).unwrap_err();
        assert_eq!(
            failure.message(),
            Some("dev@example is not a valid email address.")
        );
        assert!(email().validate(&json!(12)).is_err());
        assert!(email().validate(&Value::Null).is_ok());
    }

    #[rstest]
    #[case(json!("https://www.phpdevcommunity.com"), true)]
    #[case(json!("http://example.com/path?q=1"), true)]
    #[case(json!("ftp://files.example.com"), true)]
    #[case(json!(null), true)]
    #[case(json!("www.phpdevcommunity"), false)]
    #[case(json!("mailto:dev@example.com"), false)]
    #[case(json!("not a url"), false)]
    #[case(json!(true), false)]
    fn url_cases(#[case] value: Value, #[case] valid: bool) {
        assert_eq!(url().validate(&value).is_ok(), valid);
    }

    #[test]
    fn url_message() {
        let failure = url().validate(&json!("www.example")).unwrap_err();
        assert_eq!(failure.message(), Some("www.example is not a valid URL."));
    }
}
