//! Combinator behavior across families.

use pretty_assertions::assert_eq;
use serde_json::json;
use strata_validator::prelude::*;

use crate::{codes, paths, value};

#[test]
fn nullable_emits_null_for_absence() {
    let schema = object(fields! { "middle" => nullable(string()) });
    let result = schema.validate(&value(json!({})));
    assert_eq!(result.data(), Some(&value(json!({ "middle": null }))));
}

#[test]
fn optional_omits_absent_fields_from_output() {
    let schema = object(fields! { "middle" => string().optional() });
    let result = schema.validate(&value(json!({ "middle": null })));
    assert_eq!(result.data(), Some(&Value::Object(Map::new())));
}

#[test]
fn nullable_delegates_message_and_optionality() {
    let inner = number().min(5.0).with_message("Too low");
    let result = nullable(inner).validate_at(Some(&Value::Integer(1)), "limit");
    assert_eq!(result.errors()[0].message, "Too low");
    assert_eq!(result.errors()[0].path, "limit");
}

#[test]
fn union_mismatch_is_a_single_error_at_union_path() {
    let schema = object(fields! {
        "id" => union([string().uuid().shared(), number().integer().shared()]),
    });
    let result = schema.validate(&value(json!({ "id": 1.5 })));
    assert_eq!(codes(&result), ["union_mismatch"]);
    assert_eq!(paths(&result), ["id"]);
}

#[test]
fn union_or_extends_members() {
    let id = union([number().integer()]).or(string().uuid());
    assert_eq!(id.members().len(), 2);
    assert!(id.validate(&Value::from("123e4567-e89b-12d3-a456-426614174000")).is_valid());
}

#[test]
fn any_inside_array_keeps_items() {
    let input = value(json!([1, "two", { "three": 3 }, null]));
    assert_eq!(array(any()).validate(&input).data(), Some(&input));
}

#[test]
fn optional_array_items_become_null() {
    let result = array(number().optional()).validate(&value(json!([1, null, 3])));
    assert_eq!(result.data(), Some(&value(json!([1, null, 3]))));
}

#[test]
fn shared_validators_compose_across_schemas() {
    let email = string().trim().email().shared();
    let person = object(fields! { "email" => email.clone() });
    let team = object(fields! {
        "owner" => person.clone(),
        "members" => array(person),
        "contact" => email,
    });

    let result = team.validate(&value(json!({
        "owner": { "email": "a@b.co" },
        "members": [{ "email": "c@d.co" }, { "email": "bad" }],
        "contact": " x@y.co ",
    })));
    assert_eq!(paths(&result), ["members[1].email"]);
}

#[test]
fn validators_are_shareable_across_threads() {
    let schema = std::sync::Arc::new(object(fields! {
        "n" => number().integer(),
    }));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || schema.validate(&value(json!({ "n": i }))).is_valid())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}
