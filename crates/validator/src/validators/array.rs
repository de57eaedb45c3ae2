//! Array validator

use std::collections::HashSet;

use crate::foundation::{
    Base, Check, IntoShared, SharedValidator, ValidationError, ValidationResult, Value, path,
};

/// Validates sequences, checking every item against one item validator.
///
/// Length, item and uniqueness violations are all collected into one result.
/// Item errors carry the item path (`tags[2]`), length errors the array's own.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let tags = array(string().min_length(2)).max_length(3).unique();
///
/// let result = tags.validate(&Value::from(vec![
///     Value::from("rust"),
///     Value::from("x"),
///     Value::from("rust"),
/// ]));
/// let paths: Vec<_> = result.errors().iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, ["root[1]", "root[2]"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    base: Base,
    item: SharedValidator,
    min_length: Option<usize>,
    max_length: Option<usize>,
    non_empty: bool,
    unique: bool,
}

impl ArrayValidator {
    pub fn new(item: impl IntoShared) -> Self {
        Self {
            base: Base::default(),
            item: item.into_shared(),
            min_length: None,
            max_length: None,
            non_empty: false,
            unique: false,
        }
    }

    /// The validator applied to every item.
    #[must_use]
    pub fn item(&self) -> &SharedValidator {
        &self.item
    }

    /// Requires at least `min` items.
    pub fn min_length(&self, min: usize) -> Self {
        self.configured(|next| next.min_length = Some(min))
    }

    /// Requires at most `max` items.
    pub fn max_length(&self, max: usize) -> Self {
        self.configured(|next| next.max_length = Some(max))
    }

    /// Rejects the empty array.
    pub fn non_empty(&self) -> Self {
        self.configured(|next| next.non_empty = true)
    }

    /// Rejects items structurally equal to an earlier item.
    pub fn unique(&self) -> Self {
        self.configured(|next| next.unique = true)
    }
}

impl Check for ArrayValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        let Some(Value::Array(items)) = value else {
            return ValidationResult::invalid(ValidationError::type_mismatch("array", path, value));
        };

        let len = items.len();
        let mut errors = Vec::new();

        if let Some(min) = self.min_length {
            if len < min {
                errors.push(
                    ValidationError::new(
                        "min_length",
                        format!("Array must contain at least {min} items"),
                    )
                    .at(path, value)
                    .with_param("min", min.to_string())
                    .with_param("actual", len.to_string()),
                );
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                errors.push(
                    ValidationError::new(
                        "max_length",
                        format!("Array must contain at most {max} items"),
                    )
                    .at(path, value)
                    .with_param("max", max.to_string())
                    .with_param("actual", len.to_string()),
                );
            }
        }

        if self.non_empty && items.is_empty() {
            errors.push(ValidationError::new("not_empty", "Array must not be empty").at(path, value));
        }

        // (input index, validated item)
        let mut validated = Vec::with_capacity(len);
        for (index, item) in items.iter().enumerate() {
            let (data, item_errors) = self
                .item
                .validate_at(Some(item), &path::index(path, index))
                .into_parts();
            if item_errors.is_empty() {
                validated.push((index, data.unwrap_or(Value::Null)));
            } else {
                errors.extend(item_errors);
            }
        }

        if self.unique {
            let mut seen = HashSet::with_capacity(validated.len());
            for (index, item) in &validated {
                if !seen.insert(item.canonical_key()) {
                    errors.push(
                        ValidationError::new("not_unique", "Array items must be unique")
                            .at(path::index(path, *index), Some(item))
                            .with_param("index", index.to_string()),
                    );
                }
            }
        }

        tracing::trace!(
            path,
            items = len,
            errors = errors.len(),
            "validated array"
        );

        let data = validated.into_iter().map(|(_, item)| item).collect();
        ValidationResult::from_parts(Some(Value::Array(data)), errors)
    }
}
