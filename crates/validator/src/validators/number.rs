//! Number validator

use crate::foundation::{Base, Check, ValidationError, ValidationResult, Value};

/// Validates numeric values (integers and floats).
///
/// Non-numbers and `NaN` are rejected outright; every other check runs and
/// accumulates. Bounds are inclusive. Accepted values are emitted unchanged.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let quantity = number().integer().positive().max(99.0);
/// assert!(quantity.validate(&Value::Integer(3)).is_valid());
///
/// let result = quantity.validate(&Value::Float(-0.5));
/// let codes: Vec<_> = result.errors().iter().map(|e| e.code.as_ref()).collect();
/// assert_eq!(codes, ["integer", "positive"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    base: Base,
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
    positive: bool,
    negative: bool,
    finite: bool,
    multiple_of: Option<f64>,
}

impl NumberValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `value >= min`.
    pub fn min(&self, min: f64) -> Self {
        self.configured(|next| next.min = Some(min))
    }

    /// Requires `value <= max`.
    pub fn max(&self, max: f64) -> Self {
        self.configured(|next| next.max = Some(max))
    }

    /// Requires a whole number.
    pub fn integer(&self) -> Self {
        self.configured(|next| next.integer = true)
    }

    /// Requires `value > 0`.
    pub fn positive(&self) -> Self {
        self.configured(|next| next.positive = true)
    }

    /// Requires `value < 0`.
    pub fn negative(&self) -> Self {
        self.configured(|next| next.negative = true)
    }

    /// Rejects positive and negative infinity.
    pub fn finite(&self) -> Self {
        self.configured(|next| next.finite = true)
    }

    /// Requires `value % divisor == 0`. A zero divisor rejects every value.
    pub fn multiple_of(&self, divisor: f64) -> Self {
        self.configured(|next| next.multiple_of = Some(divisor))
    }
}

impl Check for NumberValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        let Some(number) = value.and_then(Value::as_f64) else {
            return ValidationResult::invalid(ValidationError::type_mismatch("number", path, value));
        };

        if number.is_nan() {
            return ValidationResult::invalid(
                ValidationError::new("not_a_number", "Expected number, received NaN")
                    .at(path, value),
            );
        }

        let mut errors = Vec::new();

        if self.finite && number.is_infinite() {
            errors.push(ValidationError::new("not_finite", "Number must be finite").at(path, value));
        }

        if let Some(min) = self.min {
            if number < min {
                errors.push(
                    ValidationError::new(
                        "min",
                        format!("Number must be greater than or equal to {min}"),
                    )
                    .at(path, value)
                    .with_param("min", min.to_string()),
                );
            }
        }

        if let Some(max) = self.max {
            if number > max {
                errors.push(
                    ValidationError::new("max", format!("Number must be less than or equal to {max}"))
                        .at(path, value)
                        .with_param("max", max.to_string()),
                );
            }
        }

        // fract() of an infinity is NaN, so infinities are not integers.
        if self.integer && number.fract() != 0.0 {
            errors.push(
                ValidationError::new("integer", "Expected integer, received float").at(path, value),
            );
        }

        if self.positive && number <= 0.0 {
            errors.push(ValidationError::new("positive", "Number must be positive").at(path, value));
        }

        if self.negative && number >= 0.0 {
            errors.push(ValidationError::new("negative", "Number must be negative").at(path, value));
        }

        if let Some(divisor) = self.multiple_of {
            if number % divisor != 0.0 {
                errors.push(
                    ValidationError::new(
                        "multiple_of",
                        format!("Number must be a multiple of {divisor}"),
                    )
                    .at(path, value)
                    .with_param("divisor", divisor.to_string()),
                );
            }
        }

        ValidationResult::from_parts(value.cloned(), errors)
    }
}
