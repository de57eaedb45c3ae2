//! UNION combinator - the first member that accepts the value wins

use std::sync::Arc;

use crate::foundation::{
    Base, Check, IntoShared, SharedValidator, ValidationError, ValidationResult, Value,
};

/// Tries each member in declaration order and returns the first success
/// verbatim, including its normalized data.
///
/// When every member fails, the member errors are discarded and a single
/// `union_mismatch` error is reported at the union's path. An empty union
/// rejects every value.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let id = union([string().uuid().shared(), number().integer().positive().shared()]);
/// assert!(id.validate(&Value::Integer(42)).is_valid());
///
/// let result = id.validate(&Value::Bool(true));
/// assert_eq!(result.errors()[0].code, "union_mismatch");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Union {
    base: Base,
    members: Arc<[SharedValidator]>,
}

impl Union {
    pub fn new<V: IntoShared>(members: impl IntoIterator<Item = V>) -> Self {
        Self {
            base: Base::default(),
            members: members.into_iter().map(IntoShared::into_shared).collect(),
        }
    }

    #[must_use]
    pub fn members(&self) -> &[SharedValidator] {
        &self.members
    }

    /// Appends another member, tried after the existing ones.
    pub fn or(&self, member: impl IntoShared) -> Self {
        let member = member.into_shared();
        self.configured(|next| {
            next.members = next.members.iter().cloned().chain([member]).collect();
        })
    }
}

impl Check for Union {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        for (index, member) in self.members.iter().enumerate() {
            let result = member.validate_at(value, path);
            if result.is_valid() {
                tracing::trace!(path, member = index, "union member matched");
                return result;
            }
        }

        tracing::trace!(path, members = self.members.len(), "no union member matched");
        ValidationResult::invalid(
            ValidationError::new("union_mismatch", "Value does not match any of the union types")
                .at(path, value),
        )
    }
}
