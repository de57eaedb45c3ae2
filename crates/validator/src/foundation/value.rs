//! Dynamic value model.
//!
//! Validators operate on already-deserialized, in-memory data. [`Value`] is
//! that data: a small tagged union covering every shape the validators
//! understand, including native dates and non-finite floats (which JSON
//! cannot carry but callers may still hand in).
//!
//! Absence is *not* a `Value`. Validators receive `Option<&Value>`, where
//! `None` means the value was never supplied (unset) and
//! `Some(&Value::Null)` means it was supplied as an explicit null.
//!
//! ```
//! use strata_validator::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "alice", "tags": ["a", "b"]}));
//! assert_eq!(value.kind().as_str(), "object");
//! ```

use std::fmt::{self, Write as _};

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered key/value map backing [`Value::Object`].
///
/// Iteration order is insertion order, which is what the object validator
/// uses when copying unknown keys through.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating point number. May be `NaN` or infinite.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Named fields in insertion order.
    Object(Map),
    /// A point in time, rendered as RFC 3339 with milliseconds.
    #[serde(serialize_with = "serialize_date")]
    Date(DateTime<Utc>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Integer(_) | Self::Float(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Date(_) => ValueKind::Date,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` for both integers and floats.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Boolean coercion.
    ///
    /// Null, `false`, zero, `NaN` and the empty string are falsy. Everything
    /// else is truthy, including empty arrays and objects.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => !(f.is_nan() || *f == 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Date(_) => true,
        }
    }

    /// Canonical structural key.
    ///
    /// Two values produce the same key iff they are structurally equal:
    /// numbers compare numerically (`1` and `1.0` match), strings never
    /// collide with numbers or booleans, and object keys are sorted so field
    /// order does not matter.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::Integer(i) => {
                let _ = write!(out, "{i}");
            }
            Self::Float(f) => {
                if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 {
                    let _ = write!(out, "{}", *f as i64);
                } else {
                    let _ = write!(out, "{f}");
                }
            }
            Self::String(s) => {
                let _ = write!(out, "{s:?}");
            }
            Self::Date(d) => {
                let _ = write!(out, "@{}", d.timestamp_millis());
            }
            Self::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_canonical(out);
                }
                out.push(']');
            }
            Self::Object(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
                out.push('{');
                for (i, (key, value)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    let _ = write!(out, "{key:?}:");
                    value.write_canonical(out);
                }
                out.push('}');
            }
        }
    }
}

/// Human-readable kind of a possibly absent value, as used in
/// type-mismatch messages. Unset renders as `undefined`.
#[must_use]
pub fn describe(value: Option<&Value>) -> &'static str {
    value.map_or("undefined", |v| v.kind().as_str())
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Coarse classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Date,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Integer(i) => Self::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
            Value::Date(d) => Self::String(render_date(&d)),
        }
    }
}

fn render_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&render_date(date))
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::Array(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
