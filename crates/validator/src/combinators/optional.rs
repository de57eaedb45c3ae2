//! OPTIONAL combinator - lets absent values through

use crate::foundation::{Base, Check, IntoShared, SharedValidator, ValidationResult, Value};

/// Wraps a shared validator so that unset and `null` input pass with no data.
///
/// This is [`Validator::optional`](crate::Validator::optional) for validators
/// already erased behind an `Arc`, where the `Sized` builder is unavailable.
/// Present values are handed to the inner validator unchanged.
#[derive(Debug, Clone)]
pub struct Optional {
    base: Base,
    inner: SharedValidator,
}

impl Optional {
    pub fn new(inner: impl IntoShared) -> Self {
        let mut base = Base::default();
        base.set_optional(true);
        Self {
            base,
            inner: inner.into_shared(),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &SharedValidator {
        &self.inner
    }
}

impl Check for Optional {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        self.inner.validate_at(value, path)
    }
}
