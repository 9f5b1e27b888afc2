//! The validation engine
//!
//! [`FieldRules`] is the declarative rule-set; [`FieldRules::evaluate`] is the
//! stateless walk over it that composite rules reuse; [`Validation`] wraps a
//! verified rule-set and keeps the report and normalized input of its last
//! run.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::config::ValidatorConfig;
use crate::engine::RuleProcessor;
use crate::foundation::{ConfigurationError, EmptyToNull, ErrorReport, FieldPath, Rule};
use crate::request::{self, RequestData};

// ============================================================================
// FIELD RULES
// ============================================================================

/// Ordered mapping from field name to the rules applied to it.
///
/// # Examples
///
/// ```
/// use vigil_validator::engine::FieldRules;
/// use vigil_validator::rules;
/// use vigil_validator::rules::{email, not_null};
///
/// let rules = FieldRules::new()
///     .field("email", rules![not_null(), email()])
///     .rule("password", not_null());
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FieldRules {
    fields: IndexMap<String, Vec<Box<dyn Rule>>>,
}

impl FieldRules {
    /// Creates an empty rule-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `rules` to the list of `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: impl Into<String>, rules: Vec<Box<dyn Rule>>) -> Self {
        self.fields.entry(field.into()).or_default().extend(rules);
        self
    }

    /// Appends a single rule to the list of `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, field: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.fields
            .entry(field.into())
            .or_default()
            .push(Box::new(rule));
        self
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Rules registered for `field`.
    #[must_use]
    pub fn rules_for(&self, field: &str) -> Option<&[Box<dyn Rule>]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Checks every rule's configuration.
    ///
    /// Any field name is accepted, and a field may have no rules at all; it
    /// is then only null-filled.
    pub fn verify(&self) -> Result<(), ConfigurationError> {
        for (field, rules) in &self.fields {
            for rule in rules {
                rule.verify().map_err(|error| error.within(field))?;
            }
        }
        Ok(())
    }

    /// Validates `data` without keeping any state.
    ///
    /// Only registered fields are visited; a field missing from `data` is
    /// added as `null` before its rules run.
    #[must_use]
    pub fn evaluate(&self, data: &Map<String, Value>, policy: EmptyToNull) -> Evaluation {
        let processor = RuleProcessor::new(policy);
        let mut data = data.clone();
        let mut report = ErrorReport::new();

        for (field, rules) in &self.fields {
            let value = data.entry(field.as_str()).or_insert(Value::Null);
            report.merge(processor.process(rules, field, value));
        }

        Evaluation { data, report }
    }
}

/// Result of one [`FieldRules::evaluate`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// The input with missing fields filled in as `null`.
    pub data: Map<String, Value>,
    /// Failures keyed by path.
    pub report: ErrorReport,
}

impl Evaluation {
    /// Returns true when nothing failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_empty()
    }
}

// ============================================================================
// VALIDATION ENGINE
// ============================================================================

/// A verified rule-set plus the outcome of its last run.
///
/// Each call to [`validate_array`](Self::validate_array) or
/// [`validate`](Self::validate) replaces the previous report; runs are never
/// cumulative.
///
/// # Examples
///
/// ```
/// use vigil_validator::prelude::*;
/// use serde_json::json;
///
/// let mut validation = Validation::new(field_rules! {
///     "email" => [not_null(), email()],
/// })?;
///
/// let data = json!({"email": "dev@example"});
/// assert!(!validation.validate_array(data.as_object().unwrap()));
/// assert_eq!(
///     validation.errors().get("email"),
///     Some(&["dev@example is not a valid email address.".to_owned()][..])
/// );
/// # Ok::<(), vigil_validator::foundation::ConfigurationError>(())
/// ```
#[derive(Debug)]
pub struct Validation {
    rules: FieldRules,
    config: ValidatorConfig,
    errors: ErrorReport,
    data: Map<String, Value>,
}

impl Validation {
    /// Builds an engine, rejecting inconsistent rule-sets.
    pub fn new(rules: FieldRules) -> Result<Self, ConfigurationError> {
        rules.verify()?;
        Ok(Self {
            rules,
            config: ValidatorConfig::default(),
            errors: ErrorReport::new(),
            data: Map::new(),
        })
    }

    /// Enables or disables the empty-to-null policy for the whole run.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_empty_to_null(mut self, enabled: bool) -> Self {
        self.config.empty_to_null = enabled;
        self
    }

    /// Replaces the engine configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule-set.
    #[must_use]
    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Validates a plain input mapping and returns whether it passed.
    pub fn validate_array(&mut self, data: &Map<String, Value>) -> bool {
        let Evaluation { data, report } = self.rules.evaluate(data, self.config.policy());
        self.data = data;
        self.errors = report;

        let valid = self.errors.is_empty();
        tracing::debug!(
            fields = self.rules.len(),
            errors = self.errors.len(),
            valid,
            "validation finished"
        );
        valid
    }

    /// Validates a request: body and uploaded files are merged (files win)
    /// and blank top-level strings become `null` unless disabled in the
    /// configuration.
    ///
    /// An upload that cannot be converted fails the run with the converter's
    /// message under its field.
    pub fn validate<R: RequestData + ?Sized>(&mut self, request: &R) -> bool {
        match request::collect_input(request, self.config.blank_strings_to_null) {
            Ok(data) => self.validate_array(&data),
            Err(error) => {
                tracing::error!(field = %error.field, %error, "request input rejected");
                self.data = Map::new();
                self.errors = ErrorReport::new();
                self.errors.push(FieldPath::new(error.field.as_str()), error.source.to_string());
                false
            }
        }
    }

    /// Failures of the last run.
    #[must_use]
    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    /// Normalized input of the last run.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns true when the last run passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl TryFrom<FieldRules> for Validation {
    type Error = ConfigurationError;

    fn try_from(rules: FieldRules) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleFailure;
    use crate::rules;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug)]
    struct MaxLen(usize);

    impl Rule for MaxLen {
        fn name(&self) -> &'static str {
            "max_len"
        }

        fn validate(&self, value: &Value) -> Result<(), RuleFailure> {
            match value.as_str() {
                Some(text) if text.len() > self.0 => Err(RuleFailure::new("too long")),
                _ => Ok(()),
            }
        }

        fn verify(&self) -> Result<(), ConfigurationError> {
            if self.0 == 0 {
                return Err(ConfigurationError::invalid_rule("max_len", "limit must be positive"));
            }
            Ok(())
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn missing_fields_are_normalized_to_null() {
        let mut validation = Validation::new(FieldRules::new().rule("name", MaxLen(3))).unwrap();
        assert!(validation.validate_array(&object(json!({"other": 1}))));
        assert_eq!(
            Value::Object(validation.data().clone()),
            json!({"other": 1, "name": null})
        );
    }

    #[test]
    fn only_registered_fields_are_checked() {
        let mut validation = Validation::new(FieldRules::new().rule("name", MaxLen(3))).unwrap();
        assert!(validation.validate_array(&object(json!({"unchecked": "far too long"}))));
    }

    #[test]
    fn report_is_reset_between_runs() {
        let mut validation = Validation::new(FieldRules::new().rule("name", MaxLen(3))).unwrap();

        assert!(!validation.validate_array(&object(json!({"name": "long"}))));
        assert_eq!(validation.errors().keys(), vec!["name"]);

        assert!(validation.validate_array(&object(json!({"name": "ok"}))));
        assert!(validation.errors().is_empty());
        assert!(validation.is_valid());
    }

    #[test]
    fn same_field_twice_appends_rules() {
        let rules = FieldRules::new()
            .rule("name", MaxLen(1))
            .field("name", rules![MaxLen(2)]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rules_for("name").map(<[_]>::len), Some(2));
    }

    #[test]
    fn accepts_empty_field_name() {
        let mut validation = Validation::new(FieldRules::new().rule("", MaxLen(3))).unwrap();
        assert!(!validation.validate_array(&object(json!({"": "long"}))));
        assert_eq!(validation.errors().keys(), vec![""]);
    }

    #[test]
    fn field_without_rules_is_only_null_filled() {
        let mut validation = Validation::new(FieldRules::new().field("name", Vec::new())).unwrap();
        assert!(validation.validate_array(&Map::new()));
        assert_eq!(Value::Object(validation.data().clone()), json!({"name": null}));
    }

    #[test]
    fn rule_configuration_errors_carry_the_field() {
        let error = Validation::try_from(FieldRules::new().rule("name", MaxLen(0))).unwrap_err();
        assert_eq!(error.path().to_string(), "name");
    }

    #[test]
    fn engine_policy_comes_from_config() {
        let validation = Validation::new(FieldRules::new().rule("name", MaxLen(3)))
            .unwrap()
            .with_config(ValidatorConfig {
                empty_to_null: true,
                blank_strings_to_null: false,
            });
        assert_eq!(validation.config().policy(), EmptyToNull::Enabled);
        assert!(!validation.with_empty_to_null(false).config().empty_to_null);
    }

    #[test]
    fn evaluate_is_stateless() {
        let rules = FieldRules::new().rule("name", MaxLen(1));
        let data = object(json!({"name": "ab"}));
        let first = rules.evaluate(&data, EmptyToNull::Disabled);
        let second = rules.evaluate(&data, EmptyToNull::Disabled);
        assert_eq!(first, second);
        assert!(!first.is_valid());
    }
}
