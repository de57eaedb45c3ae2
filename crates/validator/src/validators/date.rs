//! Date validator
//!
//! Accepts native dates, epoch milliseconds (numbers or digit-only strings),
//! and date strings. The emitted value is always a [`Value::Date`] in UTC.
//!
//! Check order:
//!
//! 1. type: date, number or string;
//! 2. format gate (`iso` / `timestamp`), if configured, failing fast;
//! 3. construction, failing fast on unparseable input;
//! 4. calendar plausibility and bounds, accumulated.
//!
//! Construction mirrors naive date arithmetic: a day past the end of the
//! month rolls forward (`2023-04-31` is May 1st). The plausibility check then
//! rejects February days above 29, which construction alone would accept.

use std::sync::LazyLock;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::foundation::{Base, Check, SchemaError, ValidationError, ValidationResult, Value};

static ISO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?Z?$").expect("iso regex is valid")
});

static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?)?\s*(Z|[+-]\d{2}:?\d{2})?$",
    )
    .expect("date-time regex is valid")
});

static CALENDAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})").expect("calendar regex is valid")
});

const SENTINEL_WORDS: [&str; 5] = ["invalid", "invalid date", "null", "undefined", "nan"];

// ============================================================================
// OPTIONS
// ============================================================================

/// Input format gate checked before general parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `YYYY-MM-DDTHH:mm:ss[.sss][Z]` strings.
    Iso,
    /// Numbers, or strings made only of digits.
    Timestamp,
}

impl DateFormat {
    fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Iso, Value::String(s)) => ISO_REGEX.is_match(s),
            (Self::Timestamp, Value::Integer(_) | Value::Float(_)) => true,
            (Self::Timestamp, Value::String(s)) => {
                !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
            }
            _ => false,
        }
    }

    fn error(self) -> ValidationError {
        match self {
            Self::Iso => ValidationError::new("invalid_format", "Date must be in ISO 8601 format")
                .with_param("format", "iso"),
            Self::Timestamp => {
                ValidationError::new("invalid_format", "Date must be a numeric timestamp")
                    .with_param("format", "timestamp")
            }
        }
    }
}

/// A bound that is either fixed or resolved to the current instant on every
/// `validate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    At(DateTime<Utc>),
    Now,
}

impl Bound {
    fn resolve(self, now: &mut Option<DateTime<Utc>>) -> DateTime<Utc> {
        match self {
            Self::At(at) => at,
            Self::Now => *now.get_or_insert_with(Utc::now),
        }
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates date-like values.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// let birthday = date().past();
/// assert!(birthday.validate(&Value::from("1990-05-17")).is_valid());
/// assert!(!birthday.validate(&Value::from("2023-02-30")).is_valid());
/// assert!(!birthday.validate(&Value::from("next tuesday")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    base: Base,
    min: Option<Bound>,
    max: Option<Bound>,
    format: Option<DateFormat>,
}

impl DateValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the instant to be at or after `min`.
    pub fn min(&self, min: DateTime<Utc>) -> Self {
        self.configured(|next| next.min = Some(Bound::At(min)))
    }

    /// Requires the instant to be at or before `max`.
    pub fn max(&self, max: DateTime<Utc>) -> Self {
        self.configured(|next| next.max = Some(Bound::At(max)))
    }

    /// Requires `min <= instant <= max`.
    pub fn range(&self, min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Self, SchemaError> {
        if min > max {
            tracing::debug!(%min, %max, "rejected inverted date range");
            return Err(SchemaError::InvalidRange { min, max });
        }
        Ok(self.configured(|next| {
            next.min = Some(Bound::At(min));
            next.max = Some(Bound::At(max));
        }))
    }

    /// Requires the instant to be at or before the moment of validation.
    pub fn past(&self) -> Self {
        self.configured(|next| next.max = Some(Bound::Now))
    }

    /// Requires the instant to be at or after the moment of validation.
    pub fn future(&self) -> Self {
        self.configured(|next| next.min = Some(Bound::Now))
    }

    /// Gates input on `format` before parsing.
    pub fn format(&self, format: DateFormat) -> Self {
        self.configured(|next| next.format = Some(format))
    }

    /// Shorthand for `format(DateFormat::Iso)`.
    pub fn iso(&self) -> Self {
        self.format(DateFormat::Iso)
    }

    /// Shorthand for `format(DateFormat::Timestamp)`.
    pub fn timestamp(&self) -> Self {
        self.format(DateFormat::Timestamp)
    }
}

impl Check for DateValidator {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn check(&self, value: Option<&Value>, path: &str) -> ValidationResult {
        let raw = match value {
            Some(raw @ (Value::Date(_) | Value::Integer(_) | Value::Float(_) | Value::String(_))) => {
                raw
            }
            _ => {
                return ValidationResult::invalid(ValidationError::type_mismatch(
                    "date", path, value,
                ));
            }
        };

        if let Some(format) = self.format {
            if !format.accepts(raw) {
                return ValidationResult::invalid(format.error().at(path, value));
            }
        }

        let Some(instant) = construct(raw) else {
            return ValidationResult::invalid(invalid_date(path, value));
        };

        let mut errors = Vec::new();

        if let Value::String(text) = raw {
            if !is_calendar_plausible(text) {
                errors.push(invalid_date(path, value));
            }
        }

        let mut now = None;
        if let Some(min) = self.min.map(|bound| bound.resolve(&mut now)) {
            if instant < min {
                let min = min.to_rfc3339_opts(SecondsFormat::Millis, true);
                errors.push(
                    ValidationError::new("min_date", format!("Date must be on or after {min}"))
                        .at(path, value)
                        .with_param("min", min),
                );
            }
        }
        if let Some(max) = self.max.map(|bound| bound.resolve(&mut now)) {
            if instant > max {
                let max = max.to_rfc3339_opts(SecondsFormat::Millis, true);
                errors.push(
                    ValidationError::new("max_date", format!("Date must be on or before {max}"))
                        .at(path, value)
                        .with_param("max", max),
                );
            }
        }

        ValidationResult::from_parts(Some(Value::Date(instant)), errors)
    }
}

fn invalid_date(path: &str, value: Option<&Value>) -> ValidationError {
    ValidationError::new("invalid_date", "Invalid date").at(path, value)
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

fn construct(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::Date(instant) => Some(*instant),
        Value::Integer(millis) => DateTime::from_timestamp_millis(*millis),
        Value::Float(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        Value::String(text) => parse_date_string(text),
        _ => None,
    }
}

fn parse_date_string(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty()
        || SENTINEL_WORDS.contains(&text.to_ascii_lowercase().as_str())
        || text.chars().all(char::is_alphabetic)
    {
        return None;
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().ok().and_then(DateTime::from_timestamp_millis);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Some(captures) = DATE_TIME_REGEX.captures(text) {
        return from_components(&captures);
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

fn from_components(captures: &Captures<'_>) -> Option<DateTime<Utc>> {
    let number = |i: usize| -> Option<u32> {
        captures.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    let month = number(2)?;
    let day = number(3)?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let nanos = match captures.get(7) {
        Some(fraction) => {
            let digits = fraction.as_str();
            let scale = 10u32.pow(9 - digits.len() as u32);
            digits.parse::<u32>().ok()? * scale
        }
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(number(4)?, number(5)?, number(6)?, nanos)?;

    let local = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?
        .and_time(time);

    let offset = match captures.get(8).map(|m| m.as_str()) {
        None | Some("Z" | "z") => FixedOffset::east_opt(0)?,
        Some(offset) => parse_offset(offset)?,
    };

    local
        .and_local_timezone(offset)
        .single()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Parses `+HH:MM`, `-HHMM` and similar offsets.
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let (sign, digits) = offset.split_at(1);
    let digits: String = digits.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 4 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;
    match sign {
        "+" => FixedOffset::east_opt(seconds),
        "-" => FixedOffset::west_opt(seconds),
        _ => None,
    }
}

/// Rejects impossible `YYYY-MM-DD` components that construction rolls over.
fn is_calendar_plausible(text: &str) -> bool {
    let Some(captures) = CALENDAR_REGEX.captures(text) else {
        return true;
    };
    let part = |i: usize| captures.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    match (part(2), part(3)) {
        (Some(month), Some(day)) => {
            (1..=12).contains(&month) && (1..=31).contains(&day) && !(month == 2 && day > 29)
        }
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
