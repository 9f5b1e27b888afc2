//! Engine configuration
//!
//! [`ValidatorConfig`] is deserializable with every field optional, so it can
//! be embedded in a host application's own configuration file:
//!
//! ```toml
//! [validation]
//! empty_to_null = true
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::EmptyToNull;

/// Knobs of a [`Validation`](crate::engine::Validation) engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Treat `""`, `[]` and `{}` as `null` before rules run.
    pub empty_to_null: bool,
    /// When validating a request, turn top-level strings that are empty
    /// after trimming whitespace into `null`.
    pub blank_strings_to_null: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            empty_to_null: false,
            blank_strings_to_null: true,
        }
    }
}

impl ValidatorConfig {
    /// The configured empty-to-null policy.
    #[must_use]
    pub const fn policy(&self) -> EmptyToNull {
        EmptyToNull::from_flag(self.empty_to_null)
    }
}
