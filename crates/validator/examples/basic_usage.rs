//! Basic usage example for strata-validator

use serde_json::json;
use strata_validator::prelude::*;

fn main() {
    let signup = object(fields! {
        "username" => string().trim().min_length(3).max_length(16),
        "email" => string().trim().email(),
        "age" => number().integer().min(13.0).optional(),
        "interests" => array(string()).max_length(5).unique(),
    })
    .strict();

    // Valid input
    let input = Value::from(json!({
        "username": "  ada ",
        "email": "ada@example.com",
        "interests": ["math", "engines"],
    }));
    match signup.validate(&input).into_result() {
        Ok(data) => println!("✓ accepted: {}", serde_json::Value::from(data.unwrap_or_default())),
        Err(e) => println!("✗ {}", e.report()),
    }

    // Invalid input
    let input = Value::from(json!({
        "username": "al",
        "email": "ada@",
        "age": 9.5,
        "interests": ["math", "math"],
        "admin": true,
    }));
    match signup.validate(&input).into_result() {
        Ok(_) => println!("✓ accepted"),
        Err(e) => println!("✗ {}", e.report()),
    }
}
