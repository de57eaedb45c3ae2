//! Integration tests for strata-validator.
//!
//! Inputs are written as JSON and converted into [`Value`] with [`value`].

mod combinators;
mod properties;
mod reports;
mod schemas;

use strata_validator::prelude::*;

pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

pub fn codes(result: &ValidationResult) -> Vec<&str> {
    result.errors().iter().map(|e| e.code.as_ref()).collect()
}

pub fn paths(result: &ValidationResult) -> Vec<&str> {
    result.errors().iter().map(|e| e.path.as_str()).collect()
}
