//! Result rendering: serde output, `into_result`, and text reports.

use pretty_assertions::assert_eq;
use serde_json::json;
use strata_validator::prelude::*;

use crate::value;

fn signup() -> ObjectValidator {
    object(fields! {
        "username" => string().min_length(3),
        "age" => number().min(18.0).with_message("Too young"),
    })
}

#[test]
fn failed_result_serializes_with_errors() {
    let result = signup().validate(&value(json!({ "username": "ab", "age": 12 })));

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "isValid": false,
            "data": null,
            "errors": [
                {
                    "code": "min_length",
                    "message": "String must be at least 3 characters long",
                    "path": "username",
                    "value": "ab",
                    "params": [["min", "3"], ["actual", "2"]],
                },
                {
                    "code": "min",
                    "message": "Too young",
                    "path": "age",
                    "value": 12,
                    "params": [["min", "18"]],
                },
            ],
        })
    );
}

#[test]
fn successful_result_serializes_data() {
    let result = signup().validate(&value(json!({ "username": "ada", "age": 36 })));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "isValid": true, "data": { "username": "ada", "age": 36 }, "errors": [] })
    );
}

#[test]
fn dates_serialize_as_rfc3339() {
    let result = date().validate(&Value::Integer(0));
    assert_eq!(
        serde_json::to_value(result.data()).unwrap(),
        json!("1970-01-01T00:00:00.000Z")
    );
    assert_eq!(
        serde_json::Value::from(result.into_data().unwrap()),
        json!("1970-01-01T00:00:00.000Z")
    );
}

#[test]
fn into_result_supports_question_mark() {
    fn parse(input: serde_json::Value) -> Result<Value, ValidationErrors> {
        let data = signup().validate(&value(input)).into_result()?;
        Ok(data.unwrap_or(Value::Null))
    }

    assert!(parse(json!({ "username": "ada", "age": 40 })).is_ok());

    let errors = parse(json!({ "username": 5 })).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.report(),
        "validation failed with 2 error(s):\n  \
         1. [username] type_mismatch: Expected string, received number\n  \
         2. [age] type_mismatch: Too young"
    );
}

#[test]
fn errors_iterate_in_discovery_order() {
    let errors = signup()
        .validate(&value(json!({ "username": "", "age": "x", "extra": 1 })))
        .into_result()
        .unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["username", "age"]);
}
