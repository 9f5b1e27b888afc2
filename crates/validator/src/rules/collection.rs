//! Homogeneous-list rule

use crate::engine::RuleProcessor;
use crate::foundation::{
    Composite, ConfigurationError, EmptyToNull, ErrorReport, Message, Rule, RuleFailure, Value,
};

/// Validates every element of a sequence against the same rule list.
///
/// Arrays are keyed by index and objects by key, so a failure of the second
/// tag lands under `tags.1`. `null` passes; scalars fail with a type
/// mismatch. With no element rules it only checks that the value is a
/// sequence.
///
/// # Examples
///
/// ```
/// use vigil_validator::prelude::*;
/// use serde_json::json;
///
/// let mut validation = Validation::new(field_rules! {
///     "tags" => [collection(rules![length_min(3)])],
/// })?;
///
/// let data = json!({"tags": ["a", "bc", "abc"]});
/// assert!(!validation.validate_array(data.as_object().unwrap()));
/// assert_eq!(validation.errors().keys(), vec!["tags.0", "tags.1"]);
/// # Ok::<(), vigil_validator::foundation::ConfigurationError>(())
/// ```
#[derive(Debug)]
pub struct Collection {
    rules: Vec<Box<dyn Rule>>,
    message: Message,
    policy: EmptyToNull,
}

impl Collection {
    /// Template for values that are neither arrays nor objects.
    pub const DEFAULT_MESSAGE: &'static str = "This value should be of type {{ type }}.";

    /// Creates the rule from the element rules.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
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

    /// Turns empty elements into `null` before the element rules run.
    #[must_use = "builder methods must be chained or built"]
    pub fn empty_to_null(mut self, enabled: bool) -> Self {
        self.policy = EmptyToNull::from_flag(enabled);
        self
    }

    /// The element rules.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

impl Rule for Collection {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        self.validate_with(value, self.policy)
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        Some(self)
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        self.rules.iter().try_for_each(|rule| rule.verify())
    }
}

impl Composite for Collection {
    fn policy(&self) -> EmptyToNull {
        self.policy
    }

    fn validate_with(&self, value: &Value, policy: EmptyToNull) -> Result<(), RuleFailure> {
        let processor = RuleProcessor::new(policy);
        let mut report = ErrorReport::new();

        match value {
            Value::Null => return Ok(()),
            Value::Array(items) => {
                for (index, element) in items.iter().enumerate() {
                    report.merge(processor.process(&self.rules, index, element));
                }
            }
            Value::Object(entries) => {
                for (key, element) in entries {
                    report.merge(processor.process(&self.rules, key, element));
                }
            }
            _ => return Err(self.message.failure(value, &[("type", "collection")])),
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(RuleFailure::nested(report))
        }
    }
}

/// Creates a [`Collection`] rule.
#[must_use]
pub fn collection(rules: Vec<Box<dyn Rule>>) -> Collection {
    Collection::new(rules)
}
