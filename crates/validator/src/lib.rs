//! # vigil-validator
//!
//! Declarative validation of nested JSON-like data with a path-addressed
//! error report.
//!
//! ## Quick Start
//!
//! ```
//! use vigil_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validation = Validation::new(field_rules! {
//!     "email" => [not_null(), email()],
//!     "age" => [not_null(), integer_min(18)],
//!     "tags" => [not_empty(), collection(rules![length_min(3)])],
//! })?;
//!
//! let data = json!({"email": "dev@example.com", "age": 17, "tags": ["rust", "go"]});
//! assert!(!validation.validate_array(data.as_object().unwrap()));
//! assert_eq!(
//!     serde_json::to_value(validation.errors())?,
//!     json!({
//!         "age": ["17 should be 18 or more."],
//!         "tags.1": ["go must be at least 3 characters long."],
//!     })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## How it works
//!
//! A [`FieldRules`](engine::FieldRules) maps field names to rule lists. Every
//! rule of a field runs, in order, so one field may collect several messages.
//! The composite rules [`Item`](rules::Item) and
//! [`Collection`](rules::Collection) run a nested rule-set through the same
//! engine and their failures land under dotted keys such as
//! `articles.0.title`.
//!
//! Every rule except [`NotNull`](rules::NotNull) and
//! [`NotEmpty`](rules::NotEmpty) accepts `null`, so `[email()]` means "valid
//! when present" and `[not_null(), email()]` means "required and valid".
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for single-message leaf rules, or implement
//! [`Rule`](foundation::Rule) manually for anything else.

pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod request;
pub mod rules;
