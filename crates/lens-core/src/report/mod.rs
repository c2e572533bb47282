//! Market report model.
//!
//! Reports come straight from model output, so nothing about their shape is
//! trusted. The report keeps the parsed object as-is and readers here pull
//! typed values out of it on demand.

pub mod model;

use serde_json::Value;

/// Read a JSON value as a finite number.
///
/// Accepts JSON numbers and strings holding a number (`"42"`, `" 3.5 "`),
/// since models quote numeric fields often enough to matter.
pub fn lenient_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
