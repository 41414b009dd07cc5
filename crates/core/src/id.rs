//! Record id coercion
//!
//! Records and messages carry an `id` field that is compared as an integer.
//! Comparison is soft: anything that is not recognizably numeric compares as
//! `0`. This means a record with no `id` and a record with `"id": 0` are
//! indistinguishable to id-based lookups.

use serde_json::Value;

/// Name of the id field on records and messages
pub const ID_FIELD: &str = "id";

/// Coerce a JSON value to an integer id.
///
/// - integers map to themselves (`u64` beyond `i64::MAX` saturates)
/// - floats truncate toward zero (saturating at the `i64` bounds)
/// - strings are trimmed and parsed as an integer, then as a float
/// - `true` is 1
/// - everything else is 0
pub fn coerce_id(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                n.as_f64().map(truncate).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(truncate))
                .unwrap_or(0)
        }
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// Coerced id of a record, or 0 if it has none
pub fn record_id(record: &Value) -> i64 {
    record.get(ID_FIELD).map(coerce_id).unwrap_or(0)
}

/// JSON truthiness: `null`, `false`, zero, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn truncate(f: f64) -> i64 {
    // `as` saturates at the bounds and maps NaN to 0
    f.trunc() as i64
}
