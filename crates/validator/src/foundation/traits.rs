//! Core traits for the validation system
//!
//! [`Validator`] is the capability every validator exposes. [`Check`] is the
//! extension point families implement: it supplies the type-specific core
//! check, and a blanket impl turns every `Check` into a `Validator` by running
//! it through the shared [`Base`] skeleton.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::base::Base;
use crate::foundation::path;
use crate::foundation::result::ValidationResult;
use crate::foundation::value::Value;

/// A type-erased validator, shared between schemas.
pub type SharedValidator = Arc<dyn Validator>;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The capability shared by all validators.
///
/// Validators are immutable. `optional` and `with_message` return a new
/// validator and leave the receiver as it was, so one tree can be built once
/// and used from any number of threads.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let name = string().min_length(2);
/// let maybe_name = name.optional();
///
/// assert!(!name.validate_unset().is_valid());
/// assert!(maybe_name.validate_unset().is_valid());
/// ```
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validates a possibly absent value located at `path`.
    ///
    /// `None` is the unset sentinel; `Some(&Value::Null)` is explicit null.
    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult;

    /// Validates a present value at the root path.
    fn validate(&self, value: &Value) -> ValidationResult {
        self.validate_at(Some(value), path::TOP)
    }

    /// Validates an unset value at the root path.
    fn validate_unset(&self) -> ValidationResult {
        self.validate_at(None, path::TOP)
    }

    /// Returns a copy that accepts both absence sentinels with no data.
    fn optional(&self) -> Self
    where
        Self: Sized;

    /// Returns a copy whose failures all carry `message`.
    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self
    where
        Self: Sized;

    /// Type-erases the validator for use as a child of a composite.
    fn shared(self) -> SharedValidator
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// The type-specific half of a validator.
///
/// Implement this to add a validator family; the [`Validator`] impl comes for
/// free.
///
/// ```
/// use strata_validator::prelude::*;
/// use strata_validator::Base;
///
/// #[derive(Debug, Clone, Default)]
/// struct Even {
///     base: Base,
/// }
///
/// impl Check for Even {
///     fn base(&self) -> &Base {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut Base {
///         &mut self.base
///     }
///
///     fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
///         match value {
///             Some(Value::Integer(i)) if i % 2 == 0 => ValidationResult::success(value.cloned()),
///             _ => ValidationResult::invalid(
///                 ValidationError::new("even", "Expected an even integer").at(path, value),
///             ),
///         }
///     }
/// }
///
/// assert!(Even::default().validate(&Value::Integer(4)).is_valid());
/// assert!(Even::default().optional().validate_unset().is_valid());
/// ```
pub trait Check: Clone + fmt::Debug + Send + Sync {
    fn base(&self) -> &Base;

    fn base_mut(&mut self) -> &mut Base;

    /// The core check. Runs only when the optional short-circuit did not apply.
    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult;

    /// Copy-on-configure: clones `self`, applies `configure`, returns the copy.
    #[must_use]
    fn configured(&self, configure: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        configure(&mut next);
        next
    }
}

impl<C: Check> Validator for C {
    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        self.base().run(value, |value| self.check(value, path))
    }

    fn optional(&self) -> Self {
        self.configured(|next| next.base_mut().set_optional(true))
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        self.configured(|next| next.base_mut().set_message(message))
    }
}

// ============================================================================
// CONVERSION INTO SHARED VALIDATORS
// ============================================================================

/// Anything usable as a child validator: a concrete validator or an already
/// shared one.
pub trait IntoShared {
    fn into_shared(self) -> SharedValidator;
}

impl<V: Validator + 'static> IntoShared for V {
    fn into_shared(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl IntoShared for SharedValidator {
    fn into_shared(self) -> SharedValidator {
        self
    }
}
