//! Prelude module for convenient imports.
//!
//! Provides a single `use vigil_validator::prelude::*;` import that brings
//! in the engine, every built-in rule and the declaration macros.
//!
//! # Examples
//!
//! ```
//! use vigil_validator::prelude::*;
//!
//! let rules = field_rules! {
//!     "name" => [not_null(), alphabetic(), length_min(3)],
//!     "gender" => [choice(["Mme", "Mr"])],
//! };
//! assert!(Validation::new(rules).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, failures, paths
// ============================================================================

pub use crate::foundation::{
    Composite, ConfigurationError, EmptyToNull, ErrorReport, FieldPath, Map, Message,
    PathSegment, Rule, RuleFailure, Value,
};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::engine::{Evaluation, FieldRules, RuleProcessor, Validation};
pub use crate::request::{FormRequest, InputError, RequestData, UploadStatus, UploadedFile};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{field_rules, rule, rules};
