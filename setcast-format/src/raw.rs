//! Raw backing values as they appear in storage

use serde_json::Value;
use std::fmt;

/// Backing kind of an enum type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackingKind {
    /// Cases backed by integers
    Int,
    /// Cases backed by strings
    Str,
}

/// One backing value as stored in a column
///
/// Equality is native to the kind: integers compare numerically, strings
/// byte-exact. An `Int` never equals a `Str`, so a stored `"1"` does not
/// match an integer-backed case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    /// Integer backing value
    Int(i64),
    /// String backing value
    Str(String),
}

impl RawValue {
    /// Backing kind of this value
    pub fn kind(&self) -> BackingKind {
        match self {
            RawValue::Int(_) => BackingKind::Int,
            RawValue::Str(_) => BackingKind::Str,
        }
    }

    /// Convert a JSON scalar into a backing value.
    ///
    /// Integral numbers become `Int`, strings become `Str`. Every other
    /// JSON value (bool, float, null, array, object) has no backing-value
    /// representation and yields `None`. A `u64` above `i64::MAX` is
    /// treated the same way rather than wrapping.
    pub fn from_json(value: &Value) -> Option<RawValue> {
        match value {
            Value::Number(n) => n.as_i64().map(RawValue::Int),
            Value::String(s) => Some(RawValue::Str(s.clone())),
            _ => None,
        }
    }

    /// Convert this backing value into its JSON scalar form.
    pub fn to_json(&self) -> Value {
        match self {
            RawValue::Int(i) => Value::Number((*i).into()),
            RawValue::Str(s) => Value::String(s.clone()),
        }
    }

    /// Parse one delimited-text piece into a backing value of the target
    /// kind.
    ///
    /// Integer-backed pieces must parse as `i64`; anything else yields
    /// `None` and the piece falls out of the decoded set. String-backed
    /// pieces are taken verbatim.
    pub fn parse_text(kind: BackingKind, piece: &str) -> Option<RawValue> {
        match kind {
            BackingKind::Int => piece.parse::<i64>().ok().map(RawValue::Int),
            BackingKind::Str => Some(RawValue::Str(piece.to_string())),
        }
    }

    /// Integer value, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(i) => Some(*i),
            RawValue::Str(_) => None,
        }
    }

    /// String value, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Int(_) => None,
            RawValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for RawValue {
    /// The delimited wire form: digits for `Int`, the bare string for `Str`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(i) => write!(f, "{}", i),
            RawValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Str(value)
    }
}
