//! Behavioral properties shared by every validator family.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use strata_validator::prelude::*;

use crate::{codes, paths, value};

fn scalars() -> Vec<(&'static str, SharedValidator)> {
    vec![
        ("string", string().shared()),
        ("number", number().shared()),
        ("boolean", boolean().strict().shared()),
        ("date", date().shared()),
        ("array", array(any()).shared()),
        ("object", object(fields! {}).shared()),
    ]
}

// ============================================================================
// TYPE MISMATCH
// ============================================================================

#[rstest]
#[case(json!(true))]
#[case(json!({ "a": 1 }))]
#[case(json!([1, 2]))]
#[case(json!(null))]
fn wrong_kind_yields_one_error_at_call_path(#[case] input: serde_json::Value) {
    let input = value(input);
    for (expected, validator) in scalars() {
        if input.kind().as_str() == expected {
            continue;
        }
        let result = validator.validate_at(Some(&input), "payload.field");
        assert!(!result.is_valid(), "{expected} accepted {input:?}");
        assert_eq!(paths(&result), ["payload.field"], "{expected}");
        assert_eq!(codes(&result), ["type_mismatch"], "{expected}");
    }
}

#[test]
fn type_mismatch_short_circuits_other_checks() {
    let validator = string().min_length(3).email().uuid();
    assert_eq!(codes(&validator.validate(&Value::Integer(1))), ["type_mismatch"]);
}

// ============================================================================
// OPTIONAL
// ============================================================================

#[test]
fn optional_accepts_both_absence_sentinels_without_data() {
    for (name, validator) in scalars() {
        let wrapped = optional(validator);
        for result in [wrapped.validate_unset(), wrapped.validate(&Value::Null)] {
            assert!(result.is_valid(), "{name}");
            assert_eq!(result.data(), None, "{name}");
        }
    }
}

#[test]
fn optional_leaves_present_values_alone() {
    let required = number().min(10.0);
    let optional = required.optional();
    for input in [Value::Integer(3), Value::Integer(30), Value::from("x")] {
        assert_eq!(optional.validate(&input), required.validate(&input));
    }
}

#[test]
fn non_optional_rejects_unset() {
    assert_eq!(
        string().validate_unset().errors()[0].message,
        "Expected string, received undefined"
    );
}

// ============================================================================
// WITH MESSAGE
// ============================================================================

#[test]
fn with_message_replaces_every_message() {
    let validator = string().min_length(10).email().with_message("Bad contact");
    let result = validator.validate(&Value::from("nope"));
    assert_eq!(codes(&result), ["min_length", "email"]);
    assert!(result.errors().iter().all(|e| e.message == "Bad contact"));
}

#[test]
fn with_message_on_composite_covers_nested_errors() {
    let validator = object(fields! {
        "a" => number(),
        "b" => array(number()),
    })
    .with_message("Invalid payload");
    let result = validator.validate(&value(json!({ "a": "x", "b": [1, "y"] })));
    assert_eq!(paths(&result), ["a", "b[1]"]);
    assert!(result.errors().iter().all(|e| e.message == "Invalid payload"));
}

#[test]
fn with_message_leaves_success_untouched() {
    let validator = string().trim().with_message("unused");
    assert_eq!(
        validator.validate(&Value::from(" ok ")),
        string().trim().validate(&Value::from(" ok "))
    );
}

// ============================================================================
// BUILDER INDEPENDENCE
// ============================================================================

#[test]
fn builders_never_change_the_receiver() {
    let v1 = string();
    let _v2 = v1.min_length(3);
    assert!(v1.validate(&Value::from("")).is_valid());

    let n1 = number();
    let _n2 = n1.max(0.0).with_message("m").optional();
    assert!(n1.validate(&Value::Integer(5)).is_valid());
    assert!(!n1.validate_unset().is_valid());

    let o1 = object(fields! { "a" => string() });
    let _o2 = o1.strict().partial().extend(fields! { "b" => number() });
    assert_eq!(o1.shape().collect::<Vec<_>>(), ["a"]);
    assert!(o1.validate(&value(json!({ "a": "x", "z": 1 }))).is_valid());
}

// ============================================================================
// ARRAY UNIQUENESS
// ============================================================================

#[test]
fn unique_scalars_report_second_occurrence() {
    let result = array(number()).unique().validate(&value(json!([1, 2, 1])));
    assert_eq!(paths(&result), ["root[2]"]);
    assert_eq!(codes(&result), ["not_unique"]);
}

#[test]
fn unique_objects_compare_structurally() {
    let validator = array(object(fields! { "id" => number() })).unique();
    let result = validator.validate(&value(json!([{ "id": 1 }, { "id": 1 }])));
    assert_eq!(paths(&result), ["root[1]"]);

    let validator = array(any()).unique();
    let input = value(json!([{ "a": 1, "b": [1, 2] }, { "b": [1, 2], "a": 1 }, { "a": 1, "b": [2, 1] }]));
    assert_eq!(paths(&validator.validate(&input)), ["root[1]"]);
}

#[test]
fn unique_does_not_confuse_strings_with_numbers() {
    let result = array(any()).unique().validate(&value(json!([1, "1", true, "true"])));
    assert!(result.is_valid());
}

// ============================================================================
// OBJECT DERIVED SCHEMAS
// ============================================================================

#[test]
fn strict_reports_unknown_key_at_its_path() {
    let result = object(fields! { "a" => string() })
        .strict()
        .validate(&value(json!({ "a": "x", "b": 1 })));
    assert_eq!(paths(&result), ["b"]);
}

#[test]
fn field_named_root_prefixes_its_children() {
    let validator = object(fields! { "root" => object(fields! { "a" => string() }) });
    let result = validator.validate(&value(json!({ "root": {} })));
    assert_eq!(paths(&result), ["root.a"]);

    let validator = object(fields! { "root" => array(number()) });
    let result = validator.validate(&value(json!({ "root": [1, "x"] })));
    assert_eq!(paths(&result), ["root[1]"]);
}

#[test]
fn partial_accepts_empty_object() {
    let result = object(fields! { "a" => string(), "b" => number() })
        .partial()
        .validate(&value(json!({})));
    assert!(result.is_valid());
    assert_eq!(result.data(), Some(&Value::Object(Map::new())));
}

#[test]
fn pick_keeps_field_optionality() {
    let schema = object(fields! {
        "a" => string(),
        "b" => number().optional(),
        "c" => boolean(),
    });
    let picked = schema.pick(&["b", "c"]);
    let result = picked.validate(&value(json!({ "c": "yes" })));
    assert!(result.is_valid());
    assert_eq!(result.data(), Some(&value(json!({ "c": true }))));
}

// ============================================================================
// UNION ORDER
// ============================================================================

#[test]
fn union_tries_members_in_order() {
    let validator = union([string().min_length(10), string().min_length(3)]);
    assert!(validator.validate(&Value::from("hello")).is_valid());
}

#[test]
fn union_returns_first_match_data() {
    let validator = union([string().trim().shared(), string().shared()]);
    assert_eq!(
        validator.validate(&Value::from(" x ")).data(),
        Some(&Value::from("x"))
    );
}

// ============================================================================
// DATE PLAUSIBILITY
// ============================================================================

#[test]
fn impossible_calendar_date_is_rejected() {
    let result = date().validate(&Value::from("2023-02-30"));
    assert_eq!(codes(&result), ["invalid_date"]);
}

#[rstest]
#[case("2024-02-29")]
#[case("2024-12-31T23:59:59.999Z")]
#[case("2024/01/05 08:00")]
fn plausible_dates_are_accepted(#[case] input: &str) {
    assert!(date().validate(&Value::from(input)).is_valid(), "{input}");
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn revalidating_output_is_a_fixed_point() {
    let schema = object(fields! {
        "name" => string().min_length(1),
        "score" => number().min(0.0),
        "tags" => array(string()).unique(),
        "meta" => object(fields! { "active" => boolean().strict() }),
    });
    let input = value(json!({
        "name": "Ada",
        "score": 12.5,
        "tags": ["a", "b"],
        "meta": { "active": true },
    }));

    let first = schema.validate(&input).into_data().expect("valid input");
    let second = schema.validate(&first).into_data().expect("output stays valid");
    assert_eq!(first, second);
}

#[test]
fn normalizing_validators_settle_after_one_pass() {
    let schema = object(fields! {
        "name" => string().trim(),
        "flag" => boolean(),
        "when" => date(),
    });
    let input = value(json!({ "name": "  Ada ", "flag": "on", "when": "2024-03-15" }));

    let first = schema.validate(&input).into_data().expect("valid input");
    assert_ne!(first, input);
    let second = schema.validate(&first).into_data().expect("output stays valid");
    assert_eq!(first, second);
}
