//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Rule`], [`Composite`]
//! - **Failures**: [`RuleFailure`], [`ErrorReport`]
//! - **Paths**: [`FieldPath`], [`PathSegment`]
//! - **Messages**: [`Message`]
//! - **Errors**: [`ConfigurationError`]
//!
//! # Architecture
//!
//! ## 1. Rules are values, not state
//!
//! A rule never remembers its last failure. `validate` returns a
//! [`RuleFailure`] carrying the rendered message and, for composite rules,
//! the nested report. The same rule instance can therefore be shared between
//! rule-sets and threads.
//!
//! ## 2. Composites are discovered by capability
//!
//! The processor asks [`Rule::as_composite`] instead of inspecting concrete
//! types, so new recursive rules plug in without touching the engine.
//!
//! ## 3. Paths are segments until the boundary
//!
//! The report keys are [`FieldPath`]s; the dotted form (`articles.0.title`)
//! only appears when the report is flattened or serialized.

pub mod error;
pub mod message;
pub mod path;
pub mod report;
pub mod traits;
pub mod value;

pub use error::ConfigurationError;
pub use message::{Message, display_value};
pub use path::{FieldPath, PathSegment};
pub use report::ErrorReport;
pub use traits::{Composite, EmptyToNull, Rule, RuleFailure};

pub use serde_json::{Map, Value};

/// Common imports for implementing rules.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::prelude::*;
///
/// #[derive(Debug)]
/// struct Positive;
///
/// impl Rule for Positive {
///     fn name(&self) -> &'static str {
///         "positive"
///     }
///
///     fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
///         match value.as_f64() {
///             Some(n) if n <= 0.0 => {
///                 Err(Message::from_static("{{ value }} is not positive.").failure(value, &[]))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// let failure = Positive.validate(&Value::from(-2)).unwrap_err();
/// assert_eq!(failure.message(), Some("-2 is not positive."));
/// ```
pub mod prelude {
    pub use super::{
        Composite, ConfigurationError, EmptyToNull, ErrorReport, FieldPath, Message, PathSegment,
        Rule, RuleFailure, Value,
    };
}
