//! Untrusted verse records as they appear in the source JSON files.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// An open JSON object that may carry any subset of `book`, `chapter`, `verse`,
/// `text`, `content`, `ref`, `reference`, `id` and `verseRef`.
///
/// Field types are not trusted: chapter and verse may arrive as numbers or
/// strings, text may be missing entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawVerseRecord(Map<String, Value>);

impl RawVerseRecord {
    /// Wraps a JSON value. Anything other than an object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Returns the field unless it is absent or `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Reads a field as text. Numbers and booleans are stringified; arrays and
    /// objects count as absent.
    pub(crate) fn text_field(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    /// Coerces a field to a non-negative integer.
    pub(crate) fn number_field(&self, key: &str) -> Option<u32> {
        coerce_number(self.get(key)?)
    }
}

impl From<Value> for RawVerseRecord {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for RawVerseRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn coerce_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(whole) = n.as_u64() {
                u32::try_from(whole).ok()
            } else {
                let float = n.as_f64()?;
                (float.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&float))
                    .then(|| float.trunc() as u32)
            }
        }
        Value::String(s) => parse_leading_integer(s),
        _ => None,
    }
}

/// Reads the leading run of ASCII digits after optional whitespace and an
/// optional `+`, ignoring whatever follows (`"12b"` is 12).
fn parse_leading_integer(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}
