//! Helpers for reading the loosely-typed JSON bodies the backup API returns.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthiness as the API's producers understand it: `null`, `false`, `0`
/// and `""` are falsy, everything else (including empty arrays and objects)
/// is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `body[field]` exists and is truthy.
#[must_use]
pub fn field_is_truthy(body: &Value, field: &str) -> bool {
    body.get(field).is_some_and(is_truthy)
}

/// First non-empty string found under one of `fields`, in order.
#[must_use]
pub fn first_string<'a>(body: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// Serde field helper reading an explicit `null` as `T::default()`.
///
/// Pair it with `#[serde(default)]` so a missing field behaves the same.
///
/// # Errors
///
/// Propagates errors for values that are neither `null` nor a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
