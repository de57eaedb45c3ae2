//! ANY validator - accepts every value

use crate::foundation::{Base, Check, ValidationResult, Value};

/// Accepts any input and emits it unchanged.
///
/// Useful as an item or field validator where the shape is not constrained.
#[derive(Debug, Clone, Default)]
pub struct Any {
    base: Base,
}

impl Any {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Check for Any {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, _path: &str) -> ValidationResult {
        ValidationResult::success(value.cloned())
    }
}
