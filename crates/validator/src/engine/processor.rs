//! The rule processor
//!
//! Runs the rule list of one field against that field's value and turns the
//! failures into a report keyed by the field's path.

use serde_json::Value;

use crate::foundation::{EmptyToNull, ErrorReport, FieldPath, PathSegment, Rule};

/// Runs every rule of a field and collects the failures.
///
/// Rules run in declaration order and never short-circuit: a field whose
/// first two rules fail ends up with two messages. A composite failure is
/// spliced in under `<field>.<subkey>`, overwriting whatever that key held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleProcessor {
    policy: EmptyToNull,
}

impl RuleProcessor {
    /// Creates a processor applying `policy`.
    #[must_use]
    pub const fn new(policy: EmptyToNull) -> Self {
        Self { policy }
    }

    /// The policy this processor applies.
    #[must_use]
    pub const fn policy(&self) -> EmptyToNull {
        self.policy
    }

    /// Validates `value` against `rules` and reports failures under `segment`.
    ///
    /// With the policy enabled, an empty value is replaced by `null` before
    /// the first rule runs. Composite rules receive the processor's policy
    /// combined with their own.
    pub fn process<R>(&self, rules: &[R], segment: impl Into<PathSegment>, value: &Value) -> ErrorReport
    where
        R: Rule,
    {
        let path = FieldPath::new(segment);
        let value = self.policy.apply(value);
        let mut report = ErrorReport::new();

        for rule in rules {
            let outcome = match rule.as_composite() {
                Some(composite) => {
                    composite.validate_with(value, self.policy.or(composite.policy()))
                }
                None => rule.validate(value),
            };

            let Err(failure) = outcome else {
                continue;
            };
            tracing::trace!(field = %path, rule = rule.name(), "rule failed");

            let (message, nested) = failure.into_parts();
            if let Some(message) = message {
                report.push(path.clone(), message);
            }
            for (subpath, messages) in nested {
                report.insert(path.join(&subpath), messages);
            }
        }

        report
    }
}
