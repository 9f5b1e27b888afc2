//! Predicate rule

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Message, Rule, RuleFailure, Value};

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Accepts values for which a caller-supplied predicate returns true.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::Rule;
/// use vigil_validator::rules::custom;
/// use serde_json::{Value, json};
///
/// let flag = custom(Value::is_boolean);
/// assert!(flag.validate(&json!(true)).is_ok());
/// assert_eq!(
///     flag.validate(&json!("yes")).unwrap_err().message(),
///     Some(r#""yes" is not valid"#)
/// );
/// ```
#[derive(Clone)]
pub struct Custom {
    predicate: Arc<Predicate>,
    message: Message,
}

impl Custom {
    /// Default failure template.
    pub const DEFAULT_MESSAGE: &'static str = r#""{{ value }}" is not valid"#;

    /// Wraps `predicate`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: Message::from_static(Self::DEFAULT_MESSAGE),
        }
    }

    /// Replaces the failure message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.message = Message::custom(template);
        self
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Rule for Custom {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
        if value.is_null() || (self.predicate)(value) {
            Ok(())
        } else {
            Err(self.message.failure(value, &[]))
        }
    }
}

/// Creates a [`Custom`] rule.
pub fn custom<F>(predicate: F) -> Custom
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Custom::new(predicate)
}
