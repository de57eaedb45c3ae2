//! String validator
//!
//! Lengths are measured in Unicode scalar values. With [`StringValidator::trim`]
//! the checks run against the trimmed text and the trimmed text is emitted,
//! while errors still report the original input.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Base, Check, SchemaError, ValidationError, ValidationResult, Value};

// Literal patterns, checked by the tests below.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid regex is valid")
});

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates string values.
///
/// Once the value is known to be a string, every configured check runs and
/// all violations are reported together.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let username = string().trim().min_length(3).max_length(16);
/// assert!(username.validate(&Value::from("  alice ")).is_valid());
///
/// let result = username.validate(&Value::from("al"));
/// assert_eq!(result.errors()[0].code, "min_length");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    base: Base,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    email: bool,
    url: bool,
    uuid: bool,
    trim: bool,
}

impl StringValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min` characters.
    pub fn min_length(&self, min: usize) -> Self {
        self.configured(|next| next.min_length = Some(min))
    }

    /// Requires at most `max` characters.
    pub fn max_length(&self, max: usize) -> Self {
        self.configured(|next| next.max_length = Some(max))
    }

    /// Requires a match of the regular expression `pattern`.
    pub fn pattern(&self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| {
            tracing::debug!(pattern, %source, "rejected string pattern");
            SchemaError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;
        Ok(self.regex(regex))
    }

    /// Requires a match of an already compiled regular expression.
    pub fn regex(&self, regex: Regex) -> Self {
        self.configured(|next| next.pattern = Some(regex))
    }

    /// Requires a plausible `local@domain.tld` address.
    pub fn email(&self) -> Self {
        self.configured(|next| next.email = true)
    }

    /// Requires an absolute `http` or `https` URL with a host.
    pub fn url(&self) -> Self {
        self.configured(|next| next.url = true)
    }

    /// Requires a canonical RFC 4122 UUID (versions 1-5).
    pub fn uuid(&self) -> Self {
        self.configured(|next| next.uuid = true)
    }

    /// Trims surrounding whitespace before checking and emits the trimmed text.
    pub fn trim(&self) -> Self {
        self.configured(|next| next.trim = true)
    }
}

impl Check for StringValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        let Some(Value::String(raw)) = value else {
            return ValidationResult::invalid(ValidationError::type_mismatch("string", path, value));
        };

        let text = if self.trim { raw.trim() } else { raw.as_str() };
        let length = text.chars().count();
        let mut errors = Vec::new();

        if let Some(min) = self.min_length {
            if length < min {
                errors.push(
                    ValidationError::new(
                        "min_length",
                        format!("String must be at least {min} characters long"),
                    )
                    .at(path, value)
                    .with_param("min", min.to_string())
                    .with_param("actual", length.to_string()),
                );
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                errors.push(
                    ValidationError::new(
                        "max_length",
                        format!("String must be at most {max} characters long"),
                    )
                    .at(path, value)
                    .with_param("max", max.to_string())
                    .with_param("actual", length.to_string()),
                );
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                errors.push(
                    ValidationError::new("pattern", "String does not match the required pattern")
                        .at(path, value)
                        .with_param("pattern", pattern.as_str().to_owned()),
                );
            }
        }

        if self.email && !is_email(text) {
            errors.push(ValidationError::new("email", "Invalid email address").at(path, value));
        }

        if self.url && !is_http_url(text) {
            errors.push(ValidationError::new("url", "Invalid URL").at(path, value));
        }

        if self.uuid && !UUID_REGEX.is_match(text) {
            errors.push(ValidationError::new("uuid", "Invalid UUID").at(path, value));
        }

        ValidationResult::from_parts(Some(Value::String(text.to_owned())), errors)
    }
}

/// Basic shape plus the dot and space rules a bare regex lets through.
fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
        && !text.contains("..")
        && !text.starts_with('.')
        && !text.ends_with('.')
        && !text.contains(' ')
}

fn is_http_url(text: &str) -> bool {
    url::Url::parse(text).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https")
            && url
                .host_str()
                .is_some_and(|host| !host.is_empty() && !host.starts_with('.') && !host.ends_with('.'))
    })
}

// ============================================================================
// TESTS
// ============================================================================
