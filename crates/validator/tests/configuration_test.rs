//! Which rule-sets the engine accepts and which it rejects when built.

use rstest::rstest;
use vigil_validator::prelude::*;

fn build(rules: FieldRules) -> ConfigurationError {
    match Validation::new(rules) {
        Ok(_) => panic!("rule-set should have been rejected"),
        Err(error) => error,
    }
}

#[rstest]
#[case::empty_field_name(field_rules! { "" => [not_null()] })]
#[case::blank_field_name(field_rules! { "   " => [not_null()] })]
#[case::field_without_rules(field_rules! { "email" => [] })]
#[case::collection_without_rules(field_rules! { "tags" => [collection(rules![])] })]
#[case::empty_name_inside_item(field_rules! { "person" => [item(field_rules! { "" => [not_null()] })] })]
fn unusual_but_valid_rule_sets(#[case] rules: FieldRules) {
    assert!(Validation::new(rules).is_ok());
}

#[rstest]
#[case::inverted_length(field_rules! { "name" => [string_length(Some(5), Some(2))] }, "name", "string_length")]
#[case::inverted_integer(field_rules! { "age" => [integer_range(Some(65), Some(18))] }, "age", "integer")]
#[case::empty_choice(field_rules! { "gender" => [choice(Vec::<Value>::new())] }, "gender", "choice")]
#[case::zero_upload_limit(field_rules! { "cover" => [uploaded_file(Some(0), ["image/png"])] }, "cover", "uploaded_file")]
#[case::no_mime_types(field_rules! { "cover" => [uploaded_file(None, Vec::<String>::new())] }, "cover", "uploaded_file")]
fn misconfigured_rules(
    #[case] rules: FieldRules,
    #[case] field: &str,
    #[case] rule_name: &str,
) {
    match build(rules) {
        ConfigurationError::InvalidRule {
            field: path, rule, ..
        } => {
            assert_eq!(path.to_string(), field);
            assert_eq!(rule, rule_name);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_errors_carry_the_dotted_path() {
    let error = build(field_rules! {
        "articles" => [collection(rules![item(field_rules! {
            "title" => [string_length(Some(10), Some(3))],
        })])],
    });
    assert_eq!(error.path().to_string(), "articles.title");
    assert_eq!(
        error.to_string(),
        "rule `string_length` on field `articles.title` is misconfigured: min 10 is greater than max 3"
    );
}

#[test]
fn collection_without_rules_checks_the_shape() {
    let mut validation = Validation::new(field_rules! {
        "tags" => [collection(rules![])],
    })
    .unwrap();

    let data = serde_json::json!({"tags": ["", null]});
    assert!(validation.validate_array(data.as_object().unwrap()));

    let data = serde_json::json!({"tags": "a"});
    assert!(!validation.validate_array(data.as_object().unwrap()));
    assert_eq!(
        validation.errors().get("tags"),
        Some(&["This value should be of type collection.".to_owned()][..])
    );
}
