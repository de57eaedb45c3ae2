//! Boolean validator

use serde::{Deserialize, Serialize};

use crate::foundation::{Base, Check, ValidationError, ValidationResult, Value, describe};

/// How a [`BooleanValidator`] treats non-boolean input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanMode {
    /// Booleans, plus the common string and `0`/`1` spellings.
    #[default]
    Coerce,
    /// Native booleans only.
    Strict,
    /// Anything, mapped to its truthiness. Never fails.
    Truthy,
}

/// Validates and normalizes boolean values.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let flag = boolean();
/// assert_eq!(flag.validate(&Value::from(" Yes ")).data(), Some(&Value::Bool(true)));
/// assert_eq!(flag.validate(&Value::Integer(0)).data(), Some(&Value::Bool(false)));
/// assert!(!flag.strict().validate(&Value::from("true")).is_valid());
/// assert_eq!(flag.truthy().validate(&Value::from("")).data(), Some(&Value::Bool(false)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    base: Base,
    mode: BooleanMode,
}

impl BooleanValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts native booleans only.
    pub fn strict(&self) -> Self {
        self.mode(BooleanMode::Strict)
    }

    /// Accepts anything and emits its truthiness.
    pub fn truthy(&self) -> Self {
        self.mode(BooleanMode::Truthy)
    }

    /// Sets the mode explicitly. The last mode set wins.
    pub fn mode(&self, mode: BooleanMode) -> Self {
        self.configured(|next| next.mode = mode)
    }

    #[must_use]
    pub fn current_mode(&self) -> BooleanMode {
        self.mode
    }
}

impl Check for BooleanValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        match self.mode {
            BooleanMode::Truthy => {
                ValidationResult::valid(Value::Bool(value.is_some_and(Value::is_truthy)))
            }
            BooleanMode::Strict => match value {
                Some(Value::Bool(b)) => ValidationResult::valid(Value::Bool(*b)),
                _ => ValidationResult::invalid(ValidationError::type_mismatch("boolean", path, value)),
            },
            BooleanMode::Coerce => match value.and_then(coerce) {
                Some(b) => ValidationResult::valid(Value::Bool(b)),
                None => ValidationResult::invalid(
                    ValidationError::new("invalid_boolean", "Cannot convert to boolean")
                        .at(path, value)
                        .with_param("actual", describe(value)),
                ),
            },
        }
    }
}

fn coerce(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        Value::Integer(1) => Some(true),
        Value::Integer(0) => Some(false),
        Value::Float(f) if *f == 1.0 => Some(true),
        Value::Float(f) if *f == 0.0 => Some(false),
        _ => None,
    }
}
