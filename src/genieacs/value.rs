// SPDX-License-Identifier: MIT

//! Defensive access into loosely-typed device documents
//!
//! GenieACS device records are arbitrarily nested JSON whose shape drifts
//! across device firmware versions. Every accessor here is total: malformed
//! input yields a sentinel or `None`, never a panic, so a single odd device
//! can never fail a collection cycle.

use serde_json::Value;

/// Key under which the inventory schema wraps leaf values to attach metadata
const VALUE_KEY: &str = "_value";

/// Returns the effective value of `name` inside `node`.
///
/// Value-wrapped objects (`{"_value": x, ...}`) resolve to the inner `x`;
/// any other present value is returned unchanged. A missing field, or a
/// `node` that is not an object, yields numeric `0`.
pub fn field(node: &Value, name: &str) -> Value {
    let Some(object) = node.as_object() else {
        return Value::from(0);
    };
    let Some(value) = object.get(name) else {
        return Value::from(0);
    };
    match value.as_object().and_then(|wrapped| wrapped.get(VALUE_KEY)) {
        Some(inner) => inner.clone(),
        None => value.clone(),
    }
}

/// Reads `name` via [`field`] and coerces it to a `u64` counter value.
///
/// Accepts JSON numbers and numeric strings (some firmwares report counters
/// as strings); everything else counts as 0.
pub fn counter(node: &Value, name: &str) -> u64 {
    as_u64(&field(node, name))
}

/// Descends `path` one key at a time, `None` on the first missing hop
/// or non-object intermediate node.
pub fn get_path<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = node;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

fn as_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
