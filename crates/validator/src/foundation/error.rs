//! Configuration errors
//!
//! Data that fails validation is never an error in the Rust sense: it ends up
//! in the [`ErrorReport`](crate::foundation::ErrorReport). The only `Err` this
//! crate returns is [`ConfigurationError`], raised while a rule-set is turned
//! into a [`Validation`](crate::engine::Validation) and signalling a mistake
//! in how the rules were put together.

use crate::foundation::{FieldPath, PathSegment};

/// A rule-set that cannot be used for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A rule's own parameters are inconsistent.
    #[error("rule `{rule}` on field `{field}` is misconfigured: {reason}")]
    InvalidRule {
        /// The field the rule is attached to.
        field: FieldPath,
        /// Rule name, e.g. `string_length`.
        rule: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigurationError {
    /// Creates an [`InvalidRule`](Self::InvalidRule) error not yet bound to a field.
    ///
    /// The engine fills the field path in as the error travels up.
    pub fn invalid_rule(rule: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            field: FieldPath::root(),
            rule,
            reason: reason.into(),
        }
    }

    /// Re-roots the error under `segment`.
    #[must_use]
    pub fn within(self, segment: impl Into<PathSegment>) -> Self {
        match self {
            Self::InvalidRule {
                field,
                rule,
                reason,
            } => Self::InvalidRule {
                field: field.prefixed(segment),
                rule,
                reason,
            },
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::InvalidRule { field, .. } => field,
        }
    }
}
