//! Core traits for the validation system
//!
//! This module defines the capability every rule implements, the optional
//! composite capability, and the failure value rules return.

use serde_json::Value;
use std::fmt;

use crate::foundation::{ConfigurationError, ErrorReport, value};

// ============================================================================
// EMPTY-TO-NULL POLICY
// ============================================================================

/// Whether empty values (`""`, `[]`, `{}`) are treated as `null` before rules run.
///
/// Disabled by default at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyToNull {
    /// Values are validated as given.
    #[default]
    Disabled,
    /// Empty values become `null`.
    Enabled,
}

impl EmptyToNull {
    /// Maps a boolean flag to a policy.
    #[must_use]
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    /// Returns true when conversion is active.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Enabled when either side is enabled.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self::from_flag(self.is_enabled() || other.is_enabled())
    }

    /// Applies the policy to `input`.
    #[must_use]
    pub fn apply(self, input: &Value) -> &Value {
        if self.is_enabled() && value::is_empty(input) {
            value::null()
        } else {
            input
        }
    }
}

impl From<bool> for EmptyToNull {
    fn from(enabled: bool) -> Self {
        Self::from_flag(enabled)
    }
}

// ============================================================================
// RULE FAILURE
// ============================================================================

/// What a failing rule reports.
///
/// A leaf rule fails with a message. A composite rule fails either with a
/// message (the value has the wrong shape) or with the nested report of its
/// own sub-rules, keyed relative to the composite's field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFailure {
    message: Option<String>,
    nested: ErrorReport,
}

impl RuleFailure {
    /// A failure with a direct message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            nested: ErrorReport::new(),
        }
    }

    /// A failure carrying only sub-errors.
    #[must_use]
    pub fn nested(report: ErrorReport) -> Self {
        Self {
            message: None,
            nested: report,
        }
    }

    /// The direct message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sub-errors keyed relative to the failing field.
    #[must_use]
    pub fn nested_errors(&self) -> &ErrorReport {
        &self.nested
    }

    /// Splits the failure into its message and sub-errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, ErrorReport) {
        (self.message, self.nested)
    }
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message)?,
            None => write!(f, "{} nested error(s)", self.nested.len())?,
        }
        Ok(())
    }
}

impl std::error::Error for RuleFailure {}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// The capability every rule implements.
///
/// `validate` is a pure function of the input and the rule's configuration.
/// By convention every rule except `not_null` and `not_empty` accepts `null`:
/// absence is enforced by a separate rule, so `[not_null(), email()]` means
/// "required and valid" and `[email()]` means "valid when present".
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::{Rule, RuleFailure};
/// use serde_json::{Value, json};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &'static str {
///         "even"
///     }
///
///     fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
///         match value.as_i64() {
///             None if value.is_null() => Ok(()),
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(RuleFailure::new("must be even")),
///         }
///     }
/// }
///
/// assert!(Even.validate(&json!(4)).is_ok());
/// assert!(Even.validate(&json!(3)).is_err());
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and configuration errors.
    fn name(&self) -> &'static str;

    /// Validates `value`.
    fn validate(&self, value: &Value) -> Result<(), RuleFailure>;

    /// Capability query for rules that recurse into a nested rule-set.
    fn as_composite(&self) -> Option<&dyn Composite> {
        None
    }

    /// Checks the rule's own parameters.
    ///
    /// Called once when a [`Validation`](crate::engine::Validation) is built.
    fn verify(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

/// A rule that validates through a nested rule-set.
///
/// The processor uses this capability to forward its empty-to-null policy
/// and to splice the nested report under the field's path.
pub trait Composite: Rule {
    /// The policy configured on this rule.
    fn policy(&self) -> EmptyToNull;

    /// Validates `value` with `policy` in force for the nested rule-set.
    fn validate_with(&self, value: &Value, policy: EmptyToNull) -> Result<(), RuleFailure>;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        (**self).validate(value)
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        (**self).as_composite()
    }

    fn verify(&self) -> Result<(), ConfigurationError> {
        (**self).verify()
    }
}

// ============================================================================
// TESTS
// ============================================================================
