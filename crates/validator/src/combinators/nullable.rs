//! NULLABLE combinator - maps absent values to `null`

use crate::foundation::{Base, Check, IntoShared, SharedValidator, ValidationResult, Value};

/// Accepts unset and `null` as `null`; delegates everything else.
///
/// Unlike [`optional`](crate::Validator::optional), which passes absence with
/// no data, a nullable validator always emits a value.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let middle_name = nullable(string().min_length(1));
/// assert_eq!(middle_name.validate_unset().data(), Some(&Value::Null));
/// assert!(!middle_name.validate(&Value::from("")).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Nullable {
    base: Base,
    inner: SharedValidator,
}

impl Nullable {
    pub fn new(inner: impl IntoShared) -> Self {
        Self {
            base: Base::default(),
            inner: inner.into_shared(),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &SharedValidator {
        &self.inner
    }
}

impl Check for Nullable {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        match value {
            None | Some(Value::Null) => ValidationResult::valid(Value::Null),
            Some(_) => self.inner.validate_at(value, path),
        }
    }
}
