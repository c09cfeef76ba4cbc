//! Wire encodings for stored enum sets

use crate::raw::RawValue;
use serde_json::Value;
use smallvec::SmallVec;

/// Storage encoding of a set-valued column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Comma-delimited backing values (`"1,2,3"`), the `SET`-column form
    Delimited,
    /// A JSON array literal of backing values (`"[1,2,3]"`)
    Json,
}

impl Encoding {
    /// Map a declaration keyword to its encoding.
    ///
    /// `set` selects [`Encoding::Delimited`]; `json` and its alias `array`
    /// both select [`Encoding::Json`]. Any other word is not an encoding
    /// keyword.
    pub fn from_keyword(word: &str) -> Option<Encoding> {
        match word {
            "set" => Some(Encoding::Delimited),
            "json" | "array" => Some(Encoding::Json),
            _ => None,
        }
    }

    /// Canonical declaration keyword for this encoding
    pub fn keyword(&self) -> &'static str {
        match self {
            Encoding::Delimited => "set",
            Encoding::Json => "json",
        }
    }
}

/// Split a delimited payload into trimmed, non-empty pieces.
///
/// `"1,,3"` yields `["1", "3"]` and `" 1, 2,  3"` yields `["1", "2", "3"]`;
/// a payload of only separators and whitespace yields no pieces at all.
pub fn split_delimited(raw: &str) -> SmallVec<[&str; 8]> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Join backing values into the delimited wire form.
///
/// No quoting or escaping: string backing values must not themselves
/// contain `,`. Nothing is trimmed or padded on the way out.
pub fn join_delimited(values: &[RawValue]) -> String {
    let pieces: Vec<String> = values.iter().map(RawValue::to_string).collect();
    pieces.join(",")
}

/// Parse a JSON payload into its array items.
///
/// Lenient by policy: a payload that fails to parse, or parses to anything
/// other than an array, yields no items rather than an error. Stored data
/// written by other tools must keep reading even when it is junk.
pub fn parse_json_array(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Serialize backing values as a compact JSON array literal.
pub fn to_json_array(values: &[RawValue]) -> String {
    let items: Vec<Value> = values.iter().map(RawValue::to_json).collect();
    Value::Array(items).to_string()
}
