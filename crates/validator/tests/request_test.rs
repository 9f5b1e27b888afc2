//! Request adapter: body/file merging and blank-string handling.

use pretty_assertions::assert_eq;
use serde_json::json;
use vigil_validator::prelude::*;

fn cover_rules() -> FieldRules {
    field_rules! {
        "title" => [not_null(), length_min(3)],
        "cover" => [not_null(), uploaded_file(Some(1_000_000), ["image/jpeg", "image/png"])],
    }
}

#[test]
fn uploaded_files_are_validated() {
    let mut validation = Validation::new(cover_rules()).unwrap();
    let request = FormRequest::from_value(json!({"title": "Holiday"}))
        .with_file("cover", UploadedFile::new("beach.jpg", "image/jpeg", 52_000));

    assert!(validation.validate(&request));
    assert!(validation.data()["cover"].is_object());
}

#[test]
fn uploaded_files_override_body_fields() {
    let mut validation = Validation::new(cover_rules()).unwrap();
    let request = FormRequest::from_value(json!({"title": "Holiday", "cover": "beach.jpg"}))
        .with_file("cover", UploadedFile::new("beach.gif", "image/gif", 52_000));

    assert!(!validation.validate(&request));
    assert_eq!(
        validation.errors().get("cover"),
        Some(
            &["The mime type of the file is invalid (image/gif). Allowed mime types are image/jpeg, image/png."
                .to_owned()][..]
        )
    );
}

#[test]
fn missing_upload_is_null() {
    let mut validation = Validation::new(cover_rules()).unwrap();
    let request = FormRequest::from_value(json!({"title": "Holiday"}));

    assert!(!validation.validate(&request));
    assert_eq!(validation.errors().keys(), vec!["cover"]);
    assert_eq!(
        validation.errors().get("cover"),
        Some(&["This value should not be null.".to_owned()][..])
    );
}

#[test]
fn whitespace_only_top_level_strings_become_null() {
    let mut validation = Validation::new(field_rules! {
        "name" => [not_null()],
        "profile" => [item(field_rules! { "bio" => [length_min(1)] })],
    })
    .unwrap();

    let request = FormRequest::from_value(json!({"name": "   ", "profile": {"bio": "  "}}));
    assert!(!validation.validate(&request));
    assert_eq!(validation.errors().keys(), vec!["name"]);
    assert_eq!(validation.data()["name"], Value::Null);
    assert_eq!(validation.data()["profile"], json!({"bio": "  "}));
}

#[test]
fn blanking_can_be_disabled() {
    let mut validation = Validation::new(field_rules! { "name" => [not_null()] })
        .unwrap()
        .with_config(ValidatorConfig {
            empty_to_null: false,
            blank_strings_to_null: false,
        });

    let request = FormRequest::from_value(json!({"name": "   "}));
    assert!(validation.validate(&request));
    assert_eq!(validation.data()["name"], json!("   "));
}

#[test]
fn custom_request_types_plug_in() {
    struct Query(Vec<(&'static str, &'static str)>);

    impl RequestData for Query {
        fn parsed_body(&self) -> Map<String, Value> {
            self.0
                .iter()
                .map(|(key, value)| ((*key).to_owned(), Value::from(*value)))
                .collect()
        }

        fn uploaded_files(&self) -> indexmap::IndexMap<String, UploadedFile> {
            indexmap::IndexMap::new()
        }
    }

    let mut validation = Validation::new(field_rules! {
        "page" => [not_null(), integer_min(1)],
    })
    .unwrap();

    assert!(validation.validate(&Query(vec![("page", "3")])));
    assert!(!validation.validate(&Query(vec![("page", "0")])));
    assert_eq!(
        validation.errors().get("page"),
        Some(&["0 should be 1 or more.".to_owned()][..])
    );
}
