//! Property-based tests for vigil-validator.

use proptest::prelude::*;
use serde_json::{Value, json};
use vigil_validator::prelude::*;

fn null_accepting_rules() -> Vec<Box<dyn Rule>> {
    rules![
        alphabetic(),
        alphanumeric(),
        boolean(),
        choice(["a", "b"]),
        integer_range(Some(0), Some(10)),
        numeric(),
        string_length(Some(2), Some(4)),
        email(),
        url(),
        custom(|_| false),
        uploaded_file(Some(10), ["text/plain"]),
        item(field_rules! { "x" => [not_null()] }),
        collection(rules![not_null()]),
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn engine_runs_are_idempotent(name in scalar(), age in scalar(), tags in prop::collection::vec(scalar(), 0..5)) {
        let mut validation = Validation::new(field_rules! {
            "name" => [not_null(), alphabetic(), length_min(3)],
            "age" => [integer_min(18)],
            "tags" => [collection(rules![length_min(2)])],
        }).unwrap();

        let data = json!({"name": name, "age": age, "tags": tags});
        let data = data.as_object().unwrap();

        let first_valid = validation.validate_array(data);
        let first = validation.errors().clone();
        let second_valid = validation.validate_array(data);

        prop_assert_eq!(first_valid, second_valid);
        prop_assert_eq!(&first, validation.errors());
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let rule = email();
        let value = Value::from(s);
        prop_assert_eq!(rule.validate(&value).is_ok(), rule.validate(&value).is_ok());
    }
}

// ============================================================================
// NULL PASS-THROUGH
// ============================================================================

#[test]
fn every_rule_except_presence_accepts_null() {
    for rule in null_accepting_rules() {
        assert!(rule.validate(&Value::Null).is_ok(), "{} rejected null", rule.name());
    }
    assert!(not_null().validate(&Value::Null).is_err());
    assert!(not_empty().validate(&Value::Null).is_err());
}

proptest! {
    #[test]
    fn missing_fields_pass_null_accepting_rules(names in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut rules = FieldRules::new();
        for name in &names {
            rules = rules.rule(name.as_str(), email()).rule(name.as_str(), integer());
        }
        let mut validation = Validation::new(rules).unwrap();

        prop_assert!(validation.validate_array(&Map::new()));
        prop_assert!(validation.data().values().all(Value::is_null));
    }
}

// ============================================================================
// NON-SHORT-CIRCUITING: one message per failing rule, in order
// ============================================================================

proptest! {
    #[test]
    fn failing_rules_each_add_a_message(count in 1usize..8) {
        let messages: Vec<String> = (0..count).map(|i| format!("rule {i}")).collect();
        let list: Vec<Box<dyn Rule>> = messages
            .iter()
            .map(|message| Box::new(custom(|_| false).message(message.clone())) as Box<dyn Rule>)
            .collect();

        let mut validation = Validation::new(FieldRules::new().field("f", list)).unwrap();
        let data = json!({"f": "x"});
        prop_assert!(!validation.validate_array(data.as_object().unwrap()));
        prop_assert_eq!(validation.errors().get("f"), Some(messages.as_slice()));
    }

    #[test]
    fn collection_keys_only_failing_indices(lengths in prop::collection::vec(0usize..6, 0..8)) {
        let tags: Vec<String> = lengths.iter().map(|&n| "x".repeat(n)).collect();
        let mut validation = Validation::new(field_rules! {
            "tags" => [collection(rules![length_min(3)])],
        }).unwrap();

        let data = json!({"tags": tags});
        validation.validate_array(data.as_object().unwrap());

        let expected: Vec<String> = lengths
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n < 3)
            .map(|(i, _)| format!("tags.{i}"))
            .collect();
        prop_assert_eq!(validation.errors().keys(), expected);
    }
}
