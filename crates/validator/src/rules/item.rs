//! Nested-object rule

use crate::engine::FieldRules;
use crate::foundation::{
    Composite, ConfigurationError, EmptyToNull, Message, Rule, RuleFailure, Value,
};

/// Validates a nested object against its own rule-set.
///
/// `null` passes and any other non-object fails with
/// `This value should be of type array.`, the report's label for a mapping.
/// Failures of the nested fields surface in the parent report under
/// `<field>.<subfield>`; the field itself gets no message.
///
/// # Examples
///
/// ```
/// use vigil_validator::prelude::*;
/// use serde_json::json;
///
/// let mut validation = Validation::new(field_rules! {
///     "person" => [item(field_rules! { "a" => [alphabetic()] })],
/// })?;
///
/// let data = json!({"person": {"a": "123"}});
/// assert!(!validation.validate_array(data.as_object().unwrap()));
/// assert_eq!(validation.errors().keys(), vec!["person.a"]);
/// # Ok::<(), vigil_validator::foundation::ConfigurationError>(())
/// ```
#[derive(Debug)]
pub struct Item {
    rules: FieldRules,
    message: Message,
    policy: EmptyToNull,
}

impl Item {
    /// Template for values that are not objects.
    pub const DEFAULT_MESSAGE: &'static str = "This value should be of type {{ type }}.";

    /// Creates the rule from the nested rule-set.
    #[must_use]
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            message: Message::from_static(Self::DEFAULT_MESSAGE),
            policy: EmptyToNull::Disabled,
        }
    }

    /// Replaces the type-mismatch message.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.message = Message::custom(template);
        self
    }

    /// Turns empty nested values into `null` even when the parent does not.
    #[must_use = "builder methods must be chained or built"]
    pub fn empty_to_null(mut self, enabled: bool) -> Self {
        self.policy = EmptyToNull::from_flag(enabled);
        self
    }

    /// The nested rule-set.
    #[must_use]
    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }
}

impl Rule for Item {
    fn name(&self) -> &'static str {
        "item"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        self.validate_with(value, self.policy)
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        Some(self)
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        self.rules.verify()
    }
}

impl Composite for Item {
    fn policy(&self) -> EmptyToNull {
        self.policy
    }

    fn validate_with(&self, value: &Value, policy: EmptyToNull) -> Result<(), RuleFailure> {
        let object = match value {
            Value::Null => return Ok(()),
            Value::Object(object) => object,
            _ => return Err(self.message.failure(value, &[("type", "array")])),
        };

        let evaluation = self.rules.evaluate(object, policy);
        if evaluation.is_valid() {
            Ok(())
        } else {
            Err(RuleFailure::nested(evaluation.report))
        }
    }
}

/// Creates an [`Item`] rule.
#[must_use]
pub fn item(rules: FieldRules) -> Item {
    Item::new(rules)
}
