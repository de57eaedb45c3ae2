//! End-to-end schemas resembling real payloads.

use pretty_assertions::assert_eq;
use serde_json::json;
use strata_validator::prelude::*;

use crate::{codes, paths, value};

fn address() -> ObjectValidator {
    object(fields! {
        "street" => string().trim().min_length(1),
        "city" => string().trim().min_length(1),
        "zip" => string().pattern(r"^\d{5}$").unwrap(),
    })
}

fn customer() -> ObjectValidator {
    object(fields! {
        "id" => string().uuid(),
        "email" => string().trim().email(),
        "website" => string().url().optional(),
        "birthday" => date().past().optional(),
        "newsletter" => boolean(),
        "address" => address(),
        "tags" => array(string().min_length(1)).max_length(3).unique(),
    })
    .strict()
}

#[test]
fn valid_customer_is_normalized() {
    let result = customer().validate(&value(json!({
        "id": "123e4567-e89b-12d3-a456-426614174000",
        "email": " ada@example.com ",
        "newsletter": "yes",
        "address": { "street": " 12 Analytical Way ", "city": "London", "zip": "12345" },
        "tags": ["vip"],
    })));

    assert!(result.is_valid(), "{:?}", result.errors());
    assert_eq!(
        result.into_data(),
        Some(value(json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "email": "ada@example.com",
            "newsletter": true,
            "address": { "street": "12 Analytical Way", "city": "London", "zip": "12345" },
            "tags": ["vip"],
        })))
    );
}

#[test]
fn invalid_customer_reports_every_violation() {
    let result = customer().validate(&value(json!({
        "id": "not-a-uuid",
        "email": "ada@@example",
        "website": "ftp://example.com",
        "birthday": "2999-01-01",
        "newsletter": "perhaps",
        "address": { "street": "", "zip": "1234" },
        "tags": ["a", "", "a", "b"],
        "nickname": "countess",
    })));

    assert_eq!(
        paths(&result),
        [
            "id",
            "email",
            "website",
            "birthday",
            "newsletter",
            "address.street",
            "address.city",
            "address.zip",
            "tags",
            "tags[1]",
            "tags[2]",
            "nickname",
        ]
    );
    assert_eq!(
        codes(&result),
        [
            "uuid",
            "email",
            "url",
            "max_date",
            "invalid_boolean",
            "min_length",
            "type_mismatch",
            "pattern",
            "max_length",
            "min_length",
            "not_unique",
            "unexpected_property",
        ]
    );
}

#[test]
fn partial_update_schema() {
    let update = customer().omit(&["id"]).partial();
    let result = update.validate(&value(json!({ "newsletter": false })));
    assert_eq!(result.into_data(), Some(value(json!({ "newsletter": false }))));

    let result = update.validate(&value(json!({ "address": {} })));
    assert_eq!(paths(&result), ["address.street", "address.city", "address.zip"]);
}

#[test]
fn extended_schema_keeps_field_order() {
    let admin = customer().extend(fields! {
        "email" => string().email().with_message("Admin email required"),
        "role" => union([string().shared(), number().integer().shared()]),
    });
    let names: Vec<_> = admin.shape().collect();
    assert_eq!(
        names,
        ["id", "email", "website", "birthday", "newsletter", "address", "tags", "role"]
    );

    let result = admin.validate_at(Some(&value(json!({ "email": "nope" }))), "admin");
    let email = result
        .errors()
        .iter()
        .find(|e| e.path == "admin.email")
        .expect("email error");
    assert_eq!(email.message, "Admin email required");
}

#[test]
fn nullable_object_field() {
    let schema = object(fields! {
        "billing" => address().allow_null(),
        "shipping" => nullable(address()),
    });
    let result = schema.validate(&value(json!({ "billing": null })));
    assert_eq!(
        result.into_data(),
        Some(value(json!({ "billing": null, "shipping": null })))
    );
}

#[test]
fn date_formats_in_schema() {
    let event = object(fields! {
        "starts_at" => date().iso(),
        "created" => date().timestamp(),
    });

    let ok = event.validate(&value(json!({
        "starts_at": "2024-06-01T09:00:00Z",
        "created": 1_717_232_400_000_i64,
    })));
    assert!(ok.is_valid());

    let bad = event.validate(&value(json!({ "starts_at": "June 1st", "created": "yesterday" })));
    assert_eq!(codes(&bad), ["invalid_format", "invalid_format"]);
}
