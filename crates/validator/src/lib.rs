//! # strata-validator
//!
//! A composable validation engine for dynamically typed data.
//!
//! Validators are immutable trees assembled from small building blocks. One
//! call to `validate` walks the tree and returns a [`ValidationResult`]: either
//! the normalized data, or every violation found, each tagged with the path of
//! the offending node (`"user.email"`, `"tags[2]"`).
//!
//! ## Quick Start
//!
//! ```
//! use strata_validator::prelude::*;
//!
//! let user = object(fields! {
//!     "name" => string().trim().min_length(1),
//!     "email" => string().email(),
//!     "tags" => array(string()).unique().optional(),
//! });
//!
//! let input = Value::from(serde_json::json!({
//!     "name": "  Ada ",
//!     "email": "not-an-email",
//!     "tags": ["a", "b", "a"],
//! }));
//!
//! let result = user.validate(&input);
//! let paths: Vec<_> = result.errors().iter().map(|e| e.path.as_str()).collect();
//! assert_eq!(paths, ["email", "tags[2]"]);
//! ```
//!
//! ## Absence
//!
//! A value can be *unset* (`None`, e.g. a missing object key) or *explicit
//! null* (`Some(&Value::Null)`). [`Validator::optional`] accepts both with no
//! data; [`nullable`](schema::nullable) accepts both and emits `null`.
//!
//! ## Creating Validators
//!
//! Implement [`Check`] for a new family; the [`Validator`] capability,
//! including `optional` and `with_message`, comes from a blanket impl.
//!
//! ## Built-in Validators
//!
//! - **Scalars**: [`string`](schema::string), [`number`](schema::number),
//!   [`boolean`](schema::boolean), [`date`](schema::date)
//! - **Composites**: [`array`](schema::array), [`object`](schema::object)
//! - **Combinators**: [`any`](schema::any), [`nullable`](schema::nullable),
//!   [`union`](schema::union), [`optional`](schema::optional)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use foundation::{
    Base, Check, IntoShared, Map, Params, SchemaError, SharedValidator, ValidationError,
    ValidationErrors, ValidationResult, Validator, Value, ValueKind, path,
};
