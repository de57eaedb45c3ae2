//! Schema factory
//!
//! Short constructors for every validator family, meant to be imported through
//! the [`prelude`](crate::prelude):
//!
//! ```
//! use strata_validator::prelude::*;
//!
//! let signup = object(fields! {
//!     "email" => string().trim().email(),
//!     "password" => string().min_length(12),
//!     "age" => number().integer().min(13.0).optional(),
//!     "tags" => array(string()).max_length(5).unique(),
//!     "referrer" => nullable(string().url()),
//! })
//! .strict();
//!
//! let input = Value::from(serde_json::json!({
//!     "email": "  ada@example.com ",
//!     "password": "correct horse battery",
//!     "tags": ["math", "engines"],
//!     "referrer": null,
//! }));
//! assert!(signup.validate(&input).is_valid());
//! ```

use crate::combinators::{Any, Nullable, Optional, Union};
use crate::foundation::IntoShared;
use crate::validators::{
    ArrayValidator, BooleanValidator, DateValidator, NumberValidator, ObjectValidator,
    StringValidator,
};

#[must_use]
pub fn string() -> StringValidator {
    StringValidator::new()
}

#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

#[must_use]
pub fn date() -> DateValidator {
    DateValidator::new()
}

/// Validates every item of an array with `item`.
pub fn array(item: impl IntoShared) -> ArrayValidator {
    ArrayValidator::new(item)
}

/// Validates an object against `(name, validator)` pairs, in declaration
/// order. Usually fed by [`fields!`](crate::fields).
pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> ObjectValidator
where
    K: Into<String>,
    V: IntoShared,
{
    ObjectValidator::new(fields)
}

#[must_use]
pub fn any() -> Any {
    Any::new()
}

/// Maps unset and `null` to `null`; everything else goes to `inner`.
pub fn nullable(inner: impl IntoShared) -> Nullable {
    Nullable::new(inner)
}

/// Tries `members` in order; the first success wins.
pub fn union<V: IntoShared>(members: impl IntoIterator<Item = V>) -> Union {
    Union::new(members)
}

/// Lets unset and `null` through with no data. Works on shared validators,
/// where [`Validator::optional`](crate::Validator::optional) is unavailable.
pub fn optional(inner: impl IntoShared) -> Optional {
    Optional::new(inner)
}
