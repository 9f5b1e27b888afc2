//! Choice rule

use crate::foundation::{ConfigurationError, Message, Rule, RuleFailure, Value};

/// Accepts values equal to one of a fixed list of options.
///
/// Comparison is JSON equality, so `"1"` does not match `1`.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::Rule;
/// use vigil_validator::rules::choice;
/// use serde_json::json;
///
/// let gender = choice(["Mme", "Mr"]);
/// assert!(gender.validate(&json!("Mr")).is_ok());
/// assert!(gender.validate(&json!("Dr")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    options: Vec<Value>,
    message: Message,
}

impl Choice {
    /// Default failure template.
    pub const DEFAULT_MESSAGE: &'static str = "The value you selected is not a valid choice.";

    /// Creates the rule from its options.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            message: Message::from_static(Self::DEFAULT_MESSAGE),
        }
    }

    /// Replaces the failure message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.message = Message::custom(template);
        self
    }

    /// The allowed options.
    #[must_use]
    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Rule for Choice {
    fn name(&self) -> &'static str {
        "choice"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        if value.is_null() || self.options.contains(value) {
            Ok(())
        } else {
            Err(self.message.failure(value, &[]))
        }
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        if self.options.is_empty() {
            return Err(ConfigurationError::invalid_rule(
                self.name(),
                "at least one option is required",
            ));
        }
        Ok(())
    }
}

/// Creates a [`Choice`] rule.
pub fn choice<I>(options: I) -> Choice
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Choice::new(options)
}
