//! Tolerant accessors over untyped manifest JSON.
//!
//! Symbol manifests in the wild disagree on key casing (`Id` / `id`),
//! aliases (`ObjectId`, `ObjectName`) and where member properties live (flat
//! on the member, in a `Properties` map, or in a `[{Name, Value}]` list).
//! Every normalization rule goes through one of the helpers here with an
//! explicit, ordered list of keys, so the rule is readable at the call site.
//!
//! Two lookup flavours exist:
//!
//! - [`try_keys`] returns the first *truthy* value (`null`, `false`, `0` and
//!   `""` are skipped), matching alias chains where an empty value should
//!   fall through to the next alias.
//! - [`property`] returns the first *present* value, additionally probing the
//!   lowercased key and the member's property bag.

use serde_json::{Map, Value};

/// JSON truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A value that counts as "set" for display purposes (not null, not `""`).
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// First truthy value among `keys`, in order.
pub fn try_keys<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = value.as_object()?;
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| is_truthy(v))
}

/// First truthy value among `keys`, rendered as a string.
///
/// Numbers and booleans are stringified; objects and arrays are rejected.
pub fn try_string(value: &Value, keys: &[&str]) -> Option<String> {
    try_keys(value, keys).and_then(scalar_to_string)
}

/// First truthy value among `keys`, coerced to a non-zero integer.
///
/// Numeric strings are accepted (`"50000"`); zero and unparsable values
/// yield `None`, so "no id" and "id 0" are indistinguishable.
pub fn try_number(value: &Value, keys: &[&str]) -> Option<i64> {
    try_keys(value, keys).and_then(coerce_number)
}

/// First array among the truthy values of `keys`.
pub fn try_array<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    try_keys(value, keys).and_then(Value::as_array)
}

/// Render a scalar JSON value as text.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a JSON number or numeric string to a non-zero integer.
///
/// Fractional values are rejected rather than truncated.
pub fn coerce_number(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(true) => 1.0,
        _ => return None,
    };
    (number.is_finite() && number != 0.0 && number.fract() == 0.0).then(|| number as i64)
}

/// Look up a member property across the shapes manifests use.
///
/// For each name in order: the exact key, then its lowercased form. If none
/// match, the `Properties`/`properties` bag is searched, either as a list of
/// `{Name, Value}` entries (case-insensitive names) or as a map.
pub fn property<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    let obj = value.as_object()?;
    for name in names {
        if let Some(v) = obj.get(*name).filter(|v| !v.is_null()) {
            return Some(v);
        }
        if let Some(v) = obj.get(&name.to_lowercase()).filter(|v| !v.is_null()) {
            return Some(v);
        }
    }

    let bag = obj
        .get("Properties")
        .or_else(|| obj.get("properties"))
        .filter(|v| is_truthy(v))?;
    match bag {
        Value::Array(entries) => entries.iter().find_map(|entry| {
            let entry_name = try_string(entry, &["Name", "name"]).unwrap_or_default();
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&entry_name)) {
                return None;
            }
            entry
                .get("Value")
                .filter(|v| !v.is_null())
                .or_else(|| entry.get("value"))
                .filter(|v| !v.is_null())
        }),
        Value::Object(map) => lookup_in_map(map, names),
        _ => None,
    }
}

/// Property lookup rendered as text (see [`property`]).
pub fn property_string(value: &Value, names: &[&str]) -> Option<String> {
    property(value, names)
        .filter(|v| is_truthy(v))
        .and_then(scalar_to_string)
}

fn lookup_in_map<'a>(map: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| {
        map.get(*name)
            .filter(|v| !v.is_null())
            .or_else(|| map.get(&name.to_lowercase()).filter(|v| !v.is_null()))
    })
}
