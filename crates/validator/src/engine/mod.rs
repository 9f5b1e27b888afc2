//! The recursive validation engine
//!
//! - [`RuleProcessor`] runs the rules of one field and prefixes composite
//!   sub-errors with the field's path.
//! - [`FieldRules`] walks a field→rules mapping with the processor.
//! - [`Validation`] is the stateful front: it owns a verified rule-set and the
//!   report and normalized input of its last run.
//!
//! Composite rules ([`Item`](crate::rules::Item),
//! [`Collection`](crate::rules::Collection)) call back into `FieldRules` and
//! `RuleProcessor`, so nesting of any depth is plain recursion bounded by the
//! depth of the rule-set.

pub mod processor;
pub mod validation;

pub use processor::RuleProcessor;
pub use validation::{Evaluation, FieldRules, Validation};
