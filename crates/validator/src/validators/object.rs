//! Object validator
//!
//! An [`ObjectValidator`] holds an ordered schema of field validators. The
//! schema lives behind an `Arc`, so the builders below share it until one of
//! them actually changes the field set.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::combinators::Optional;
use crate::foundation::{
    Base, Check, IntoShared, Map, SharedValidator, ValidationError, ValidationResult, Value, path,
};

type Fields = IndexMap<String, SharedValidator>;

/// Validates object-shaped values against a field schema.
///
/// Fields are checked in declaration order, and the output object lists them
/// in that order. A missing key is handed to its validator as unset, so only
/// fields marked optional may be left out.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let user = object(fields! {
///     "name" => string().min_length(1),
///     "age" => number().integer().optional(),
/// })
/// .strict();
///
/// let input = Value::from(serde_json::json!({ "name": "Ada", "admin": true }));
/// let result = user.validate(&input);
///
/// assert_eq!(result.errors().len(), 1);
/// assert_eq!(result.errors()[0].path, "admin");
/// assert_eq!(result.errors()[0].code, "unexpected_property");
/// ```
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    base: Base,
    fields: Arc<Fields>,
    strict: bool,
    allow_null: bool,
}

impl ObjectValidator {
    /// Creates a validator from `(name, validator)` pairs, in declaration order.
    ///
    /// A repeated name keeps its first position and its last validator.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: IntoShared,
    {
        Self {
            base: Base::default(),
            fields: Arc::new(collect_fields(fields)),
            strict: false,
            allow_null: false,
        }
    }

    /// Declared field names, in order.
    pub fn shape(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// The validator declared for `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SharedValidator> {
        self.fields.get(name)
    }

    /// Reports keys outside the schema instead of passing them through.
    pub fn strict(&self) -> Self {
        self.configured(|next| next.strict = true)
    }

    /// Accepts `null` and unset input, emitting `null`.
    pub fn allow_null(&self) -> Self {
        self.configured(|next| next.allow_null = true)
    }

    /// Makes every field optional.
    pub fn partial(&self) -> Self {
        self.with_fields(
            self.fields
                .iter()
                .map(|(name, field)| (name.clone(), Optional::new(Arc::clone(field)).into_shared()))
                .collect(),
        )
    }

    /// Keeps only the named fields, in declaration order.
    pub fn pick(&self, names: &[&str]) -> Self {
        self.warn_unknown("pick", names);
        self.with_fields(
            self.fields
                .iter()
                .filter(|(name, _)| names.contains(&name.as_str()))
                .map(|(name, field)| (name.clone(), Arc::clone(field)))
                .collect(),
        )
    }

    /// Drops the named fields.
    pub fn omit(&self, names: &[&str]) -> Self {
        self.warn_unknown("omit", names);
        self.with_fields(
            self.fields
                .iter()
                .filter(|(name, _)| !names.contains(&name.as_str()))
                .map(|(name, field)| (name.clone(), Arc::clone(field)))
                .collect(),
        )
    }

    /// Adds fields. A name already in the schema keeps its position and takes
    /// the new validator.
    pub fn extend<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: IntoShared,
    {
        let mut merged = Fields::clone(&self.fields);
        merged.extend(collect_fields(fields));
        self.with_fields(merged)
    }

    fn with_fields(&self, fields: Fields) -> Self {
        self.configured(|next| next.fields = Arc::new(fields))
    }

    fn warn_unknown(&self, operation: &'static str, names: &[&str]) {
        for name in names.iter().filter(|name| !self.fields.contains_key(**name)) {
            tracing::debug!(operation, field = name, "ignoring field missing from schema");
        }
    }
}

fn collect_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Fields
where
    K: Into<String>,
    V: IntoShared,
{
    fields
        .into_iter()
        .map(|(name, field)| (name.into(), field.into_shared()))
        .collect()
}

impl Check for ObjectValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        if self.allow_null && value.is_none_or(Value::is_null) {
            return ValidationResult::valid(Value::Null);
        }

        let Some(Value::Object(input)) = value else {
            return ValidationResult::invalid(ValidationError::type_mismatch("object", path, value));
        };

        let mut output = Map::with_capacity(input.len());
        let mut errors = Vec::new();

        for (name, field) in self.fields.iter() {
            let (data, field_errors) = field
                .validate_at(input.get(name), &path::field(path, name))
                .into_parts();
            errors.extend(field_errors);
            if let Some(data) = data {
                output.insert(name.clone(), data);
            }
        }

        for (key, extra) in input.iter().filter(|(key, _)| !self.fields.contains_key(*key)) {
            if self.strict {
                errors.push(
                    ValidationError::new("unexpected_property", format!("Unexpected property `{key}`"))
                        .at(path::field(path, key), Some(extra))
                        .with_param("property", key.clone()),
                );
            } else {
                output.insert(key.clone(), extra.clone());
            }
        }

        tracing::trace!(
            path,
            fields = self.fields.len(),
            errors = errors.len(),
            "validated object"
        );

        ValidationResult::from_parts(Some(Value::Object(output)), errors)
    }
}
