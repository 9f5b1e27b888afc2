//! String length rule
//!
//! Length is measured in Unicode scalar values (chars), so `"été"` has length 3.

use crate::foundation::{ConfigurationError, Message, Rule, RuleFailure, Value};

/// Accepts strings whose char count lies within inclusive bounds.
///
/// Non-string values fail with the "not a valid string" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLength {
    min: Option<usize>,
    max: Option<usize>,
    invalid_message: Message,
    min_message: Message,
    max_message: Message,
}

impl StringLength {
    /// Template for values that are not strings.
    pub const INVALID_MESSAGE: &'static str = "{{ value }} is not a valid string.";
    /// Template for strings below the minimum length.
    pub const MIN_MESSAGE: &'static str = "{{ value }} must be at least {{ limit }} characters long.";
    /// Template for strings above the maximum length.
    pub const MAX_MESSAGE: &'static str = "{{ value }} cannot be longer than {{ limit }} characters.";

    /// Creates a rule with optional bounds.
    #[must_use]
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            invalid_message: Message::from_static(Self::INVALID_MESSAGE),
            min_message: Message::from_static(Self::MIN_MESSAGE),
            max_message: Message::from_static(Self::MAX_MESSAGE),
        }
    }

    /// Replaces the "not a string" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.invalid_message = Message::custom(template);
        self
    }

    /// Replaces the "too short" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_message(mut self, template: impl Into<String>) -> Self {
        self.min_message = Message::custom(template);
        self
    }

    /// Replaces the "too long" message.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_message(mut self, template: impl Into<String>) -> Self {
        self.max_message = Message::custom(template);
        self
    }
}

impl Rule for StringLength {
    fn name(&self) -> &'static str {
        "string_length"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        let text = match value {
            Value::Null => return Ok(()),
            Value::String(text) => text,
            _ => return Err(self.invalid_message.failure(value, &[])),
        };

        let length = text.chars().count();
        match (self.min, self.max) {
            (Some(min), _) if length < min => {
                Err(self.min_message.failure(value, &[("limit", &min.to_string())]))
            }
            (_, Some(max)) if length > max => {
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

/// Creates a [`StringLength`] rule with optional bounds.
#[must_use]
pub const fn string_length(min: Option<usize>, max: Option<usize>) -> StringLength {
    StringLength::new(min, max)
}

/// Creates a [`StringLength`] rule with a minimum.
#[must_use]
pub const fn length_min(min: usize) -> StringLength {
    StringLength::new(Some(min), None)
}

/// Creates a [`StringLength`] rule with a maximum.
#[must_use]
pub const fn length_max(max: usize) -> StringLength {
    StringLength::new(None, Some(max))
}
