//! Error types for validation failures
//!
//! [`ValidationError`] describes one violation at one path. Validators never
//! return `Err` for bad input data; violations travel inside a
//! [`ValidationResult`](crate::ValidationResult). The only `Err` values in the
//! crate are [`SchemaError`]s raised while *building* a validator.
//!
//! Code and message use `Cow<'static, str>` so the common case of static
//! text does not allocate.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::path::{ROOT, TOP};
use crate::foundation::value::{Value, describe};

/// Ordered message parameters, typically 0-2 entries.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single violation found while validating a value.
///
/// # Examples
///
/// ```
/// use strata_validator::{ValidationError, Value};
///
/// let value = Value::from("ab");
/// let error = ValidationError::new("min_length", "String must be at least 3 characters long")
///     .at("username", Some(&value))
///     .with_param("min", "3");
///
/// assert_eq!(error.path, "username");
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Stable identifier for programmatic handling, e.g. `"min_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message. This is what `with_message` overrides.
    pub message: Cow<'static, str>,

    /// Address of the offending node, e.g. `"root"`, `"user.email"`, `"tags[2]"`.
    pub path: String,

    /// The offending input. `None` when the value was never supplied.
    pub value: Option<Value>,

    /// Bound values and other message parameters.
    #[serde(skip_serializing_if = "no_params")]
    pub params: Params,
}

fn no_params(params: &Params) -> bool {
    params.is_empty()
}

impl ValidationError {
    /// Creates a new error with a code and message at the root path.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: ROOT.to_owned(),
            value: None,
            params: SmallVec::new(),
        }
    }

    /// Places the error at `path` and records the offending value.
    ///
    /// The empty top-level path is stored as `"root"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, path: impl Into<String>, value: Option<&Value>) -> Self {
        self.path = path.into();
        if self.path == TOP {
            self.path.push_str(ROOT);
        }
        self.value = value.cloned();
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "type_mismatch" error: `Expected <expected>, received <kind>`.
    pub fn type_mismatch(expected: &'static str, path: &str, value: Option<&Value>) -> Self {
        let actual = describe(value);
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, received {actual}"),
        )
        .at(path, value)
        .with_param("expected", expected)
        .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.path, self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered violations of a failed validation, as an error type.
///
/// Produced by [`ValidationResult::into_result`](crate::ValidationResult::into_result)
/// for callers that prefer `?` over inspecting the result.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("validation failed with {} error(s)", .errors.len())]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Renders every error on its own line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = format!("{self}:");
        for (i, error) in self.errors.iter().enumerate() {
            out.push_str(&format!("\n  {}. {error}", i + 1));
        }
        out
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Misuse of the construction API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A string pattern failed to compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A date range whose lower bound is after its upper bound.
    #[error("invalid date range: {min} is after {max}")]
    InvalidRange {
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    },
}

// ============================================================================
// TESTS
// ============================================================================
