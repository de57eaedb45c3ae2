//! Outcome of one `validate` call.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::error::{ValidationError, ValidationErrors};
use crate::foundation::value::Value;

/// Success with (possibly normalized) data, or failure with one or more errors.
///
/// Validity is derived from the error list, so a result is valid exactly when
/// it carries no errors, and a failed result never carries data.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let result = string().trim().validate(&Value::from("  hi  "));
/// assert!(result.is_valid());
/// assert_eq!(result.data(), Some(&Value::from("hi")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    data: Option<Value>,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A successful result. `None` means "accepted, nothing to emit".
    #[must_use]
    pub fn success(data: Option<Value>) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// A successful result emitting `data`.
    #[must_use]
    pub fn valid(data: Value) -> Self {
        Self::success(Some(data))
    }

    /// A failed result.
    #[must_use]
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "a failed result needs at least one error");
        Self { data: None, errors }
    }

    /// A failed result with a single error.
    #[must_use]
    pub fn invalid(error: ValidationError) -> Self {
        Self::failure(vec![error])
    }

    /// Success with `data` if `errors` is empty, otherwise failure.
    #[must_use]
    pub fn from_parts(data: Option<Value>, errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::success(data)
        } else {
            Self::failure(errors)
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accepted value, if any.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Violations in deterministic order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Splits into data and errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<Value>, Vec<ValidationError>) {
        (self.data, self.errors)
    }

    /// Converts into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<Option<Value>, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }

    /// Replaces the message of every error. Successful results are untouched.
    #[must_use]
    pub(crate) fn with_message(mut self, message: &Cow<'static, str>) -> Self {
        for error in &mut self.errors {
            error.message = message.clone();
        }
        self
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
