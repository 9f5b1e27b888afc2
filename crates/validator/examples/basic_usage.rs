//! Basic usage example for vigil-validator

use serde_json::json;
use vigil_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut validation = Validation::new(field_rules! {
        "email" => [not_null(), email()],
        "age" => [not_null(), integer_min(18)],
        "articles" => [
            not_empty(),
            collection(rules![item(field_rules! {
                "title" => [not_empty(), length_min(3)],
            })]),
        ],
    })?;

    let request = FormRequest::from_value(json!({
        "email": "dev@example",
        "age": "17",
        "articles": [{"title": "Hello"}, {"title": ""}],
    }));

    if validation.validate(&request) {
        println!("✓ request is valid");
    } else {
        println!("✗ {}", validation.errors());
        println!("{}", serde_json::to_string_pretty(validation.errors())?);
    }

    Ok(())
}
