//! Message templates
//!
//! Rule messages are templates with `{{ name }}` placeholders. `{{ value }}`
//! always refers to the value under validation; rules add their own
//! parameters such as `{{ type }}` or `{{ limit }}`.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::foundation::RuleFailure;

/// A failure message template.
///
/// Built-in defaults are `&'static str` and never allocate; custom messages
/// supplied by the caller are owned.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::Message;
/// use serde_json::json;
///
/// let message = Message::from_static("{{ value }} should be {{ limit }} or more.");
/// assert_eq!(message.render(&json!(3), &[("limit", "18")]), "3 should be 18 or more.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Cow<'static, str>);

impl Message {
    /// Wraps a built-in template.
    #[must_use]
    pub const fn from_static(template: &'static str) -> Self {
        Self(Cow::Borrowed(template))
    }

    /// Wraps a caller-supplied template.
    pub fn custom(template: impl Into<String>) -> Self {
        Self(Cow::Owned(template.into()))
    }

    /// Returns the raw template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.0
    }

    /// Substitutes `{{ value }}` and every `(name, text)` parameter.
    #[must_use]
    pub fn render(&self, value: &Value, params: &[(&str, &str)]) -> String {
        let mut rendered = if self.0.contains("{{ value }}") {
            self.0.replace("{{ value }}", &display_value(value))
        } else {
            self.0.clone().into_owned()
        };
        for (name, text) in params {
            rendered = rendered.replace(&format!("{{{{ {name} }}}}"), text);
        }
        rendered
    }

    /// Renders the template into a leaf [`RuleFailure`].
    #[must_use]
    pub fn failure(&self, value: &Value, params: &[(&str, &str)]) -> RuleFailure {
        RuleFailure::new(self.render(value, params))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Message {
    fn from(template: &'static str) -> Self {
        Self::from_static(template)
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Self::custom(template)
    }
}

/// Renders a value for `{{ value }}`.
///
/// Strings appear verbatim; everything else uses its compact JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
