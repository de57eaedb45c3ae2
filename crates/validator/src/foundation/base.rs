//! Cross-cutting behavior shared by every validator.

use std::borrow::Cow;

use crate::foundation::result::ValidationResult;
use crate::foundation::value::Value;

/// The optional flag and message override every validator carries.
///
/// [`Base::run`] wraps a family's core check:
///
/// 1. optional and absent (unset or explicit null): success, no data;
/// 2. otherwise run the core check;
/// 3. on failure, replace every error message with the override, if set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base {
    optional: bool,
    message: Option<Cow<'static, str>>,
}

impl Base {
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The message override, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
    }

    pub fn set_message(&mut self, message: impl Into<Cow<'static, str>>) {
        self.message = Some(message.into());
    }

    /// Runs `check` under the optional and message-override rules.
    pub fn run(
        &self,
        value: Option<&Value>,
        check: impl FnOnce(Option<&Value>) -> ValidationResult,
    ) -> ValidationResult {
        if self.optional && value.is_none_or(Value::is_null) {
            return ValidationResult::success(None);
        }

        let result = check(value);
        match &self.message {
            Some(message) if !result.is_valid() => result.with_message(message),
            _ => result,
        }
    }
}
