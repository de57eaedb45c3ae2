//! Prelude module for convenient imports.
//!
//! Provides a single `use strata_validator::prelude::*;` import that brings
//! in the schema factory, the core traits, the value model and the result
//! types.
//!
//! # Examples
//!
//! ```
//! use strata_validator::prelude::*;
//!
//! let username = string().trim().min_length(3).max_length(20);
//! let age = number().integer().min(18.0).max(100.0);
//! let tags = array(string()).non_empty().max_length(10);
//!
//! assert!(username.validate(&Value::from("alice")).is_valid());
//! assert!(!age.validate(&Value::Integer(12)).is_valid());
//! assert!(!tags.validate(&Value::Array(Vec::new())).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, results, errors
// ============================================================================

pub use crate::foundation::{
    Check, IntoShared, Map, SchemaError, SharedValidator, ValidationError, ValidationErrors,
    ValidationResult, Validator, Value, ValueKind,
};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::combinators::{Any, Nullable, Optional, Union};
pub use crate::validators::{
    ArrayValidator, BooleanMode, BooleanValidator, DateFormat, DateValidator, NumberValidator,
    ObjectValidator, StringValidator,
};

// ============================================================================
// SCHEMA FACTORY
// ============================================================================

pub use crate::fields;
pub use crate::schema::{
    any, array, boolean, date, nullable, number, object, optional, string, union,
};
