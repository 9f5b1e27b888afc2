//! Numeric rules
//!
//! Form input usually arrives as strings, so both rules accept numeric text
//! as well as JSON numbers.

use crate::foundation::{ConfigurationError, Message, Rule, RuleFailure, Value};

/// Returns true for text that reads as a finite decimal number.
fn is_numeric_text(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        && text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// The integer held by `value`: a JSON integer, or text in the `i64` or `u64` range.
fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from)),
        Value::String(text) => text
            .parse::<i64>()
            .map(i128::from)
            .or_else(|_| text.parse::<u64>().map(i128::from))
            .ok(),
        _ => None,
    }
}

// ============================================================================
// NUMERIC
// ============================================================================

crate::rule! {
    /// Accepts JSON numbers and strings such as `"2000.25"` or `"-1e3"`.
    pub Numeric as "numeric";
    message "{{ value }} is not a valid number.";
    rule(value) { value.is_number() || value.as_str().is_some_and(is_numeric_text) }
    fn numeric();
}

// ============================================================================
// INTEGER
// ============================================================================

/// Accepts integers, optionally within inclusive bounds.
///
/// JSON floats are rejected even when they have no fractional part.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::Rule;
/// use vigil_validator::rules::integer_min;
/// use serde_json::json;
///
/// let adult = integer_min(18);
/// assert!(adult.validate(&json!(20)).is_ok());
/// assert!(adult.validate(&json!("20")).is_ok());
/// assert_eq!(
///     adult.validate(&json!(17)).unwrap_err().message(),
///     Some("17 should be 18 or more.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    min: Option<i64>,
    max: Option<i64>,
    invalid_message: Message,
    min_message: Message,
    max_message: Message,
}

impl Integer {
    /// Template for values that are not integers.
    pub const INVALID_MESSAGE: &'static str = "{{ value }} is not a valid integer.";
    /// Template for values below the minimum.
    pub const MIN_MESSAGE: &'static str = "{{ value }} should be {{ limit }} or more.";
    /// Template for values above the maximum.
    pub const MAX_MESSAGE: &'static str = "{{ value }} should be {{ limit }} or less.";

    /// Creates an unbounded integer rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            invalid_message: Message::from_static(Self::INVALID_MESSAGE),
            min_message: Message::from_static(Self::MIN_MESSAGE),
            max_message: Message::from_static(Self::MAX_MESSAGE),
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Replaces the "not an integer" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.invalid_message = Message::custom(template);
        self
    }

    /// Replaces the "too small" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_message(mut self, template: impl Into<String>) -> Self {
        self.min_message = Message::custom(template);
        self
    }

    /// Replaces the "too large" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_message(mut self, template: impl Into<String>) -> Self {
        self.max_message = Message::custom(template);
        self
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Integer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        if value.is_null() {
            return Ok(());
        }
        let Some(number) = as_integer(value) else {
            return Err(self.invalid_message.failure(value, &[]));
        };

        match (self.min, self.max) {
            (Some(min), _) if number < i128::from(min) => {
                Err(self.min_message.failure(value, &[("limit", &min.to_string())]))
            }
            (_, Some(max)) if number > i128::from(max) => {
                Err(self.max_message.failure(value, &[("limit", &max.to_string())]))
            }
            _ => Ok(()),
        }
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigurationError::invalid_rule(
                self.name(),
                format!("min {min} is greater than max {max}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Creates an unbounded [`Integer`] rule.
#[must_use]
pub const fn integer() -> Integer {
    Integer::new()
}

/// Creates an [`Integer`] rule with optional inclusive bounds.
#[must_use]
pub fn integer_range(min: Option<i64>, max: Option<i64>) -> Integer {
    Integer {
        min,
        max,
        ..Integer::new()
    }
}

/// Creates an [`Integer`] rule with a lower bound.
#[must_use]
pub const fn integer_min(min: i64) -> Integer {
    Integer::new().min(min)
}

/// Creates an [`Integer`] rule with an upper bound.
#[must_use]
pub const fn integer_max(max: i64) -> Integer {
    Integer::new().max(max)
}

// ============================================================================
// TESTS
// ============================================================================
